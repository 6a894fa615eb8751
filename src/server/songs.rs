//! Song listing and search routes.

use axum::extract::{rejection::PathRejection, Path, State};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::error;

use super::enumerations::EnumerationKind;
use super::envelope::{ApiError, Envelope};
use super::params::{FilterEcho, PageParams, RandomParams, SearchParams};
use super::state::GuardedCatalogProvider;
use crate::catalog::{CatalogProvider, SearchFilter, Song};

pub const ADVANCED_SEARCH_EXAMPLE: &str = "/api/advanced-search?q=beat&genre=House&mood=Happy";

type SongsResult = Result<Envelope<Vec<Song>>, ApiError>;

/// A search filter built from request parameters, keeping track of which
/// names were accepted.
///
/// Unknown genre and mood names are dropped rather than rejected.
#[derive(Debug, PartialEq, Eq)]
struct ResolvedFilter<'a> {
    filter: SearchFilter,
    accepted: FilterEcho<'a>,
}

impl<'a> ResolvedFilter<'a> {
    fn resolve(catalog: &dyn CatalogProvider, params: &'a SearchParams) -> Self {
        let query = params.query();
        let genre = params
            .genre()
            .and_then(|name| Some((name, EnumerationKind::Genre.lookup(catalog, name)?)));
        let mood = params
            .mood()
            .and_then(|name| Some((name, EnumerationKind::Mood.lookup(catalog, name)?)));

        ResolvedFilter {
            filter: SearchFilter {
                query: query.map(str::to_string),
                genre: genre.map(|(_, value)| value),
                mood: mood.map(|(_, value)| value),
            },
            accepted: FilterEcho {
                query,
                genre: genre.map(|(name, _)| name),
                mood: mood.map(|(name, _)| name),
            },
        }
    }
}

/// Shuffle uniformly and keep at most `count` songs.
pub fn sample_songs<R: Rng + ?Sized>(
    mut songs: Vec<Song>,
    count: usize,
    rng: &mut R,
) -> Vec<Song> {
    songs.shuffle(rng);
    songs.truncate(count);
    songs
}

pub async fn get_songs(
    State(catalog): State<GuardedCatalogProvider>,
    params: PageParams,
) -> SongsResult {
    let page = params.page();
    let songs = catalog.fetch_latest(page).await.map_err(|err| {
        error!("Error fetching songs: {}", err);
        ApiError::provider(err)
    })?;

    Ok(Envelope::list(songs).with_page(page))
}

pub async fn search(
    State(catalog): State<GuardedCatalogProvider>,
    params: SearchParams,
) -> SongsResult {
    if params.is_blank() {
        return Err(
            ApiError::validation("At least one filter is required: query (q), genre, or mood")
                .with_context(
                    EnumerationKind::Genre.available_key(),
                    EnumerationKind::Genre.available_names(catalog.as_ref()),
                )
                .with_context(
                    EnumerationKind::Mood.available_key(),
                    EnumerationKind::Mood.available_names(catalog.as_ref()),
                ),
        );
    }

    let page = params.page();
    let resolved = ResolvedFilter::resolve(catalog.as_ref(), &params);
    let songs = catalog
        .search(&resolved.filter, page)
        .await
        .map_err(|err| {
            error!("Error searching: {}", err);
            ApiError::provider(err).with_context("filters", params.raw_filters())
        })?;

    Ok(Envelope::list(songs)
        .with_context("filters", &resolved.accepted)
        .with_page(page))
}

fn path_segment(segment: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    segment
        .map(|Path(name)| name)
        .map_err(|rejection| ApiError::validation(rejection.body_text()))
}

async fn strict_listing(
    catalog: &dyn CatalogProvider,
    kind: EnumerationKind,
    name: String,
    page: u32,
) -> SongsResult {
    let Some(value) = kind.lookup(catalog, &name) else {
        return Err(
            ApiError::validation(format!("{} \"{}\" not found", kind.label(), name))
                .with_context(kind.available_key(), kind.available_names(catalog)),
        );
    };

    let filter = match kind {
        EnumerationKind::Genre => SearchFilter::by_genre(value),
        EnumerationKind::Mood => SearchFilter::by_mood(value),
    };
    let songs = catalog.search(&filter, page).await.map_err(|err| {
        error!("Error fetching {} songs: {}", name, err);
        ApiError::provider(err).with_context(kind.key(), &name)
    })?;

    Ok(Envelope::list(songs)
        .with_context(kind.key(), &name)
        .with_page(page))
}

pub async fn get_genre_songs(
    State(catalog): State<GuardedCatalogProvider>,
    genre_name: Result<Path<String>, PathRejection>,
    params: PageParams,
) -> SongsResult {
    strict_listing(
        catalog.as_ref(),
        EnumerationKind::Genre,
        path_segment(genre_name)?,
        params.page(),
    )
    .await
}

pub async fn get_mood_songs(
    State(catalog): State<GuardedCatalogProvider>,
    mood_name: Result<Path<String>, PathRejection>,
    params: PageParams,
) -> SongsResult {
    strict_listing(
        catalog.as_ref(),
        EnumerationKind::Mood,
        path_segment(mood_name)?,
        params.page(),
    )
    .await
}

pub async fn advanced_search(
    State(catalog): State<GuardedCatalogProvider>,
    params: SearchParams,
) -> SongsResult {
    let resolved = ResolvedFilter::resolve(catalog.as_ref(), &params);
    if resolved.filter.is_empty() {
        return Err(ApiError::validation("At least one search parameter is required")
            .with_context("example", ADVANCED_SEARCH_EXAMPLE));
    }

    let page = params.page();
    let songs = catalog
        .search(&resolved.filter, page)
        .await
        .map_err(|err| {
            error!("Error in advanced search: {}", err);
            ApiError::provider(err).with_context("searchFilter", &resolved.filter)
        })?;

    Ok(Envelope::list(songs)
        .with_context("searchFilter", &resolved.filter)
        .with_page(page))
}

pub async fn get_random_songs(
    State(catalog): State<GuardedCatalogProvider>,
    params: RandomParams,
) -> SongsResult {
    let requested = params.count();
    let songs = catalog.fetch_latest(0).await.map_err(|err| {
        error!("Error fetching random songs: {}", err);
        ApiError::provider(err)
    })?;

    let sample = sample_songs(songs, requested, &mut rand::rng());
    Ok(Envelope::list(sample).with_context("requested", requested))
}
