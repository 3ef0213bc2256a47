//! Command implementations for Vendr CLI

pub mod cache;
pub mod check;
pub mod completions;
pub mod helpers;
pub mod install;
pub mod version;
