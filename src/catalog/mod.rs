//! Catalog provider abstraction.
//!
//! The server owns no song data: everything comes from a [`CatalogProvider`],
//! which in production is the [`ncs::NcsClient`] talking to ncs.io.

mod enumeration;
mod error;
mod models;
pub mod ncs;
mod trait_def;

pub use enumeration::{Enumeration, EnumerationEntry};
pub use error::CatalogError;
pub use models::{Artist, SearchFilter, Song};
pub use trait_def::CatalogProvider;
