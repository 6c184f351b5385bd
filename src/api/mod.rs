//! PokeAPI interaction module
//!
//! # Module Structure
//!
//! - [`http`] - HTTP wrapper: GET, status check, JSON parsing
//! - [`client`] - URL construction and typed fetching
//! - [`cache`] - Memoizing wrapper around the client
//!
//! # Example
//!
//! ```ignore
//! use pokedex::api::{CachedClient, PokeClient};
//! use pokedex::models::Pokemon;
//!
//! async fn example() -> pokedex::Result<()> {
//!     let client = CachedClient::new(PokeClient::new()?);
//!     let pikachu: Pokemon = client.get("pikachu").await?;
//!     assert_eq!(pikachu.id, 25);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod http;

pub use cache::CachedClient;
pub use client::{PokeClient, DEFAULT_BASE_URL};
pub use http::PokeHttpClient;
