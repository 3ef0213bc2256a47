//! Deserialization helpers for the manifest

use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::domain::BundleSpec;

/// One `bundles` entry as written in the manifest
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleEntry {
    #[serde(deserialize_with = "deserialize_version")]
    version: String,
    url: String,
}

/// Deserialize the `bundles` mapping, keeping declaration order
pub fn deserialize_bundles<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<(String, BundleSpec)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BundlesVisitor;

    impl<'de> Visitor<'de> for BundlesVisitor {
        type Value = Vec<(String, BundleSpec)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping of bundle name to version and url")
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut seen = HashSet::new();
            let mut bundles = Vec::new();

            while let Some(name) = map.next_key::<String>()? {
                let entry: BundleEntry = map.next_value()?;
                if !seen.insert(name.clone()) {
                    return Err(de::Error::custom(format!("duplicate bundle '{name}'")));
                }
                bundles.push((name, BundleSpec::new(entry.version, entry.url)));
            }

            Ok(bundles)
        }
    }

    deserializer.deserialize_any(BundlesVisitor)
}

/// Versions are opaque strings; YAML numbers and booleans would be
/// re-rendered (`0x10` reads back as `16`), so only strings are accepted
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct VersionVisitor;

    fn unquoted<E: de::Error>(value: impl fmt::Display) -> E {
        E::custom(format!(
            "version {value} was not read as a string; quote it in vendr.yaml to keep it exact"
        ))
    }

    impl Visitor<'_> for VersionVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a version string")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> std::result::Result<String, E>
        where
            E: de::Error,
        {
            Err(unquoted(value))
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<String, E>
        where
            E: de::Error,
        {
            Err(unquoted(value))
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<String, E>
        where
            E: de::Error,
        {
            Err(unquoted(value))
        }

        fn visit_f64<E>(self, value: f64) -> std::result::Result<String, E>
        where
            E: de::Error,
        {
            Err(unquoted(value))
        }
    }

    deserializer.deserialize_any(VersionVisitor)
}
