//! Shared constants for end-to-end tests
//!
//! When the fake ncs.io listings change, update only this file.

// ============================================================================
// Timeouts
// ============================================================================

/// Timeout of every request made by the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Timeout of the ncs client used by the test server
pub const NCS_TIMEOUT_SECS: u64 = 5;

/// How long to wait for a spawned server to answer
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness probes
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

// ============================================================================
// Fake ncs.io listings
// ============================================================================

/// Songs on the first page of the latest releases
pub const LATEST_SONG_COUNT: usize = 3;

/// Track id of "Heroes Tonight"
pub const SONG_1_ID: &str = "7c3e1c0d-1111-4a4a-9d3e-000000000001";

/// Title of the first latest release
pub const SONG_1_NAME: &str = "Heroes Tonight";

/// Artists of "Heroes Tonight", rendered as artist page links
pub const SONG_1_ARTISTS: [&str; 2] = ["Janji", "Johnning"];

/// Title of the second latest release, whose artists are a plain list
pub const SONG_2_NAME: &str = "Dreams";

/// Title of the only song returned by every search
pub const SEARCH_SONG_NAME: &str = "Sky High";

/// A search query the fake ncs.io answers with 503
pub const FAILING_QUERY: &str = "explode";

// ============================================================================
// Built-in filter ids
// ============================================================================

/// Filter id of the "House" genre
pub const HOUSE_GENRE_ID: &str = "13";

/// Filter id of the "Happy" mood
pub const HAPPY_MOOD_ID: &str = "11";

/// Number of built-in genres
pub const GENRE_COUNT: usize = 21;

/// Number of built-in moods
pub const MOOD_COUNT: usize = 24;
