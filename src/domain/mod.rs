//! Domain models for Vendr
//!
//! Pure data: declared bundles and the registry that resolves them to
//! repository paths. Nothing in here touches the file system.

pub mod bundle;
pub mod registry;

pub use bundle::{Bundle, BundleSpec};
pub use registry::Registry;
