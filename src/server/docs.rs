//! Self-describing documentation route.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};

use super::enumerations::EnumerationKind;
use super::state::GuardedCatalogProvider;

/// Every route served, with a usage example and a description.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /health", "Health check"),
    ("GET /api/songs?page=0", "Get latest songs with pagination"),
    (
        "GET /api/search?q=query&genre=House&mood=Happy&page=0",
        "Search with filters",
    ),
    ("GET /api/genre/House?page=0", "Get songs by specific genre"),
    ("GET /api/mood/Happy?page=0", "Get songs by specific mood"),
    ("GET /api/genres", "Get all available genres"),
    ("GET /api/moods", "Get all available moods"),
    (
        "GET /api/advanced-search?q=beat&genre=House",
        "Advanced search with multiple filters",
    ),
    ("GET /api/random?count=5", "Get random songs"),
    ("GET /api/docs", "This documentation"),
];

pub const EXAMPLES: &[(&str, &str)] = &[
    ("House music only", "/api/genre/House"),
    (
        "Search for 'beat' in House genre",
        "/api/search?q=beat&genre=House",
    ),
    ("Happy mood songs", "/api/mood/Happy"),
    (
        "Complex search",
        "/api/advanced-search?q=music&genre=Electronic&mood=Euphoric",
    ),
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocs {
    pub success: bool,
    pub message: String,
    pub endpoints: Map<String, Value>,
    pub examples: Map<String, Value>,
    pub available_genres: Vec<String>,
    pub available_moods: Vec<String>,
}

fn to_map(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

pub async fn get_docs(State(catalog): State<GuardedCatalogProvider>) -> Json<ApiDocs> {
    Json(ApiDocs {
        success: true,
        message: "NCS API Documentation".to_string(),
        endpoints: to_map(ENDPOINTS),
        examples: to_map(EXAMPLES),
        available_genres: EnumerationKind::Genre.available_names(catalog.as_ref()),
        available_moods: EnumerationKind::Mood.available_names(catalog.as_ref()),
    })
}
