//! Typed client for the PokeAPI REST service
//!
//! Builds `<base_url>/<resource_type>/<id_or_name>/` URLs, issues GET
//! requests, requires a `200 OK`, and deserializes the body into the record
//! type for that resource. [`CachedClient`] memoizes responses per
//! `(resource type, identifier)` pair.
//!
//! ```ignore
//! use pokedex::{CachedClient, PokeClient};
//! use pokedex::models::{EvolutionChain, PokemonSpecies};
//!
//! async fn example() -> pokedex::Result<()> {
//!     let client = CachedClient::new(PokeClient::new()?);
//!     let eevee: PokemonSpecies = client.get("eevee").await?;
//!     if let Some(chain) = &eevee.evolution_chain {
//!         let chain: EvolutionChain = client.inner().follow_api(chain).await?;
//!         println!("{:?}", chain.species_names());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod resource;

pub use api::{CachedClient, PokeClient};
pub use config::Config;
pub use error::{format_api_error, Error, Result};
pub use resource::{Identifier, IntoIdentifier, Resource, ResourceKind};
