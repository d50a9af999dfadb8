//! Pokémon TCG API client library
//!
//! An async Rust client for the Pokémon TCG API (v2): fluent queries over
//! cards and sets, typed models, and page-by-page iteration.
//!
//! # Example
//!
//! ```ignore
//! use pokemon_tcg::TcgClient;
//! use pokemon_tcg::query::Predicate;
//!
//! let client = TcgClient::from_env();
//!
//! let card = client.cards().find("xy7-54").await?;
//!
//! let vmaxes = client
//!     .cards()
//!     .filter("types", Predicate::or(["grass", "lightning"]))
//!     .filter("rarity", "vmax")
//!     .all()
//!     .await?;
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod registry;
pub mod response;

mod client;

pub use client::*;
pub use error::Error;
pub use registry::AnyModel;
pub use registry::ModelRegistry;
pub use response::Pagination;
pub use response::ResourcePage;
