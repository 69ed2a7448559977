//! Domain types - pure version data independent of file and environment access

pub mod version;

pub use version::{ReleaseLevel, VersionRecord};
