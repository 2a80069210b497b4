//! Core data types for the settler settings evaluator.
//!
//! This crate defines the model of an evaluated Flutter Android host-project
//! build configuration: the local properties file, artifact repository
//! descriptors, plugin declarations, project includes, and the settings pass
//! that assembles them.
//!
//! This crate is intentionally free of async code and network I/O.

/// File holding machine-local configuration at the host project root.
pub const LOCAL_PROPERTIES_FILE: &str = "local.properties";

/// Properties key naming the Flutter SDK installation directory.
pub const FLUTTER_SDK_KEY: &str = "flutter.sdk";

pub mod plugin;
pub mod project;
pub mod properties;
pub mod repository;
pub mod settings;
