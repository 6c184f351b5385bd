//! Resource abstraction layer
//!
//! # Architecture
//!
//! - [`registry`] - The closed set of resource types and the [`Resource`] trait
//!   binding each record type to its endpoint
//! - [`identifier`] - Id-or-name identifiers, validated before any request
//! - [`dispatch`] - Maps a runtime resource type to its typed record
//!
//! # Example
//!
//! ```ignore
//! use pokedex::resource::{Identifier, ResourceKind};
//!
//! let kind: ResourceKind = "pokemon-species".parse()?;
//! let id: Identifier = "bulbasaur".parse()?;
//! assert!(kind.accepts_names());
//! ```

pub mod dispatch;
mod identifier;
mod registry;

pub use dispatch::{fetch_record_json, RecordSource};
pub use identifier::{Identifier, IntoIdentifier};
pub use registry::*;
