//! Query building and compilation.
//!
//! This module owns the whole path from fluent calls to an outbound request:
//! predicates and ordering accumulate in a [`QuerySpec`], a terminal call
//! compiles it into a [`RequestSpec`], and [`Pages`] walks a
//! collection query page by page.
//!
//! # Example
//!
//! ```ignore
//! use pokemon_tcg::query::{Direction, Predicate};
//!
//! let cards = client
//!     .cards()
//!     .filter("types", Predicate::or(["grass", "lightning"]))
//!     .order_by("hp", Direction::Desc)
//!     .all()
//!     .await?;
//! ```

mod builder;
mod filter;
pub(crate) mod lucene;
mod order;
mod pages;
mod spec;

pub use builder::QueryBuilder;
pub use filter::Combinator;
pub use filter::Predicate;
pub use order::Direction;
pub use pages::Pages;
pub use spec::DEFAULT_PAGE;
pub use spec::DEFAULT_PAGE_SIZE;
pub use spec::QuerySpec;
pub use spec::RequestSpec;
