use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Artist {
    pub fn named(name: impl Into<String>) -> Self {
        Artist {
            name: name.into(),
            url: None,
        }
    }
}

/// A song as listed by the catalog provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// Filter passed to [`super::CatalogProvider::search`].
///
/// `genre` and `mood` hold enumeration values (provider filter ids), not names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<u32>,
}

impl SearchFilter {
    pub fn by_genre(genre: u32) -> Self {
        SearchFilter {
            genre: Some(genre),
            ..Default::default()
        }
    }

    pub fn by_mood(mood: u32) -> Self {
        SearchFilter {
            mood: Some(mood),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.genre.is_none() && self.mood.is_none()
    }
}
