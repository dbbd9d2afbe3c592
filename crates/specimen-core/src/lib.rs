//! # specimen-core
//!
//! Static inspection fixture and copy-as-JSON views for Specimen.
//!
//! This crate provides:
//! - The literal-valued fixture record graph (`TestObject`, `Address`, `User`)
//! - The fixed status line printed after construction
//! - Depth-guarded JSON views of any serializable value
//! - A flattened, debugger-style variables view
//! - A persisted registry of local project directories
//! - Cross-cutting error types

pub mod errors;
pub mod fixture;
pub mod inspect;
pub mod projects;

pub use errors::CoreError;
pub use fixture::{Address, STATUS_LINE, TestObject, User};
pub use inspect::{DEFAULT_MAX_DEPTH, DEPTH_MARKER, InspectOptions, ValueKind, Variable};
pub use projects::{ProjectEntry, ProjectPage, ProjectQuery, ProjectRegistry, ProjectStore, SortKey};
