//! Genre and mood enumeration routes.

use axum::extract::State;

use super::envelope::Envelope;
use super::state::GuardedCatalogProvider;
use crate::catalog::{CatalogProvider, Enumeration, EnumerationEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerationKind {
    Genre,
    Mood,
}

impl EnumerationKind {
    /// Capitalized name used in error messages, e.g. `Genre "X" not found`.
    pub fn label(self) -> &'static str {
        match self {
            EnumerationKind::Genre => "Genre",
            EnumerationKind::Mood => "Mood",
        }
    }

    /// Key under which a name of this kind is echoed back.
    pub fn key(self) -> &'static str {
        match self {
            EnumerationKind::Genre => "genre",
            EnumerationKind::Mood => "mood",
        }
    }

    /// Key under which the valid names are listed.
    pub fn available_key(self) -> &'static str {
        match self {
            EnumerationKind::Genre => "availableGenres",
            EnumerationKind::Mood => "availableMoods",
        }
    }

    pub fn table(self, catalog: &dyn CatalogProvider) -> Option<&Enumeration> {
        match self {
            EnumerationKind::Genre => catalog.genres(),
            EnumerationKind::Mood => catalog.moods(),
        }
    }

    pub fn lookup(self, catalog: &dyn CatalogProvider, name: &str) -> Option<u32> {
        self.table(catalog).and_then(|table| table.get(name))
    }

    /// Valid names, empty when the provider has no such table.
    pub fn available_names(self, catalog: &dyn CatalogProvider) -> Vec<String> {
        self.table(catalog)
            .map(|table| table.names().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

fn list_enumeration(
    catalog: &dyn CatalogProvider,
    kind: EnumerationKind,
) -> Envelope<Vec<EnumerationEntry>> {
    match kind.table(catalog) {
        Some(table) => Envelope::list(table.entries().to_vec()),
        None => Envelope::success(Vec::new()).with_message(format!(
            "{}s not available from this catalog provider",
            kind.label()
        )),
    }
}

pub async fn get_genres(
    State(catalog): State<GuardedCatalogProvider>,
) -> Envelope<Vec<EnumerationEntry>> {
    list_enumeration(catalog.as_ref(), EnumerationKind::Genre)
}

pub async fn get_moods(
    State(catalog): State<GuardedCatalogProvider>,
) -> Envelope<Vec<EnumerationEntry>> {
    list_enumeration(catalog.as_ref(), EnumerationKind::Mood)
}
