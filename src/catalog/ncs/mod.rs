//! NoCopyrightSounds (ncs.io) catalog provider.
//!
//! ncs.io has no public JSON API, so songs are read from the same HTML
//! listings the website renders.

mod client;
mod listing;
mod tables;

pub use client::{NcsClient, DEFAULT_NCS_BASE_URL};
pub use listing::parse_listing;
pub use tables::{default_genres, default_moods};
