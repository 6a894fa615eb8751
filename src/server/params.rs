//! Query string parameters.
//!
//! The parameter structs are their own extractors and never reject a request:
//! a repeated key keeps its first value, numbers are read from their leading
//! digits and fall back to their defaults, blank strings count as absent.

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::Serialize;
use std::convert::Infallible;

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_RANDOM_COUNT: usize = 10;

/// Leading integer of `raw`: "3abc" is 3, " 7" is 7, "abc" has none.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(leading_integer)
        .and_then(|page| u32::try_from(page).ok())
        .unwrap_or(DEFAULT_PAGE)
}

fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.trim().is_empty())
}

/// Query string pairs in request order, repeated keys included.
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn from_uri(uri: &Uri) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        QueryPairs(pairs)
    }

    fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        parse_page(self.page.as_deref())
    }
}

#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub page: Option<String>,
}

/// The text filters of a request, as echoed back in responses.
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct FilterEcho<'a> {
    pub query: Option<&'a str>,
    pub genre: Option<&'a str>,
    pub mood: Option<&'a str>,
}

impl SearchParams {
    pub fn query(&self) -> Option<&str> {
        non_blank(&self.q)
    }

    pub fn genre(&self) -> Option<&str> {
        non_blank(&self.genre)
    }

    pub fn mood(&self) -> Option<&str> {
        non_blank(&self.mood)
    }

    pub fn page(&self) -> u32 {
        parse_page(self.page.as_deref())
    }

    /// True when no filter was given at all, valid or not.
    pub fn is_blank(&self) -> bool {
        self.query().is_none() && self.genre().is_none() && self.mood().is_none()
    }

    pub fn raw_filters(&self) -> FilterEcho<'_> {
        FilterEcho {
            query: self.query(),
            genre: self.genre(),
            mood: self.mood(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RandomParams {
    pub count: Option<String>,
}

impl RandomParams {
    pub fn count(&self) -> usize {
        self.count
            .as_deref()
            .and_then(leading_integer)
            .and_then(|count| usize::try_from(count).ok())
            .filter(|count| *count > 0)
            .unwrap_or(DEFAULT_RANDOM_COUNT)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PageParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = QueryPairs::from_uri(&parts.uri);
        Ok(PageParams {
            page: pairs.first("page"),
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SearchParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = QueryPairs::from_uri(&parts.uri);
        Ok(SearchParams {
            q: pairs.first("q"),
            genre: pairs.first("genre"),
            mood: pairs.first("mood"),
            page: pairs.first("page"),
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for RandomParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = QueryPairs::from_uri(&parts.uri);
        Ok(RandomParams {
            count: pairs.first("count"),
        })
    }
}
