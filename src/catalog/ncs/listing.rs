//! Parser for the ncs.io HTML song listings.
//!
//! Every song on a listing page has a play button of the form
//! `<a class="... player-play ..." data-tid=".." data-track=".." ...>`
//! carrying everything the API exposes about it.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::catalog::{Artist, CatalogError, Song};

const PLAY_BUTTON_CLASS: &str = "player-play";

lazy_static! {
    // Quoted attribute values may legally contain '>'.
    static ref ANCHOR_TAG: Regex = Regex::new(r#"<a\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).unwrap();
    static ref ATTRIBUTE: Regex =
        Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref ARTIST_LINK: Regex =
        Regex::new(r#"<a\b[^>]*?href\s*=\s*["']([^"']*)["'][^>]*>([^<]*)</a>"#).unwrap();
    static ref NUMERIC_ENTITY: Regex = Regex::new(r"&#([xX][0-9A-Fa-f]+|[0-9]+);").unwrap();
}

/// Extract the songs of a listing page.
///
/// A page without any play button is a valid, empty listing. An empty body
/// is not: ncs.io always renders a full page.
pub fn parse_listing(html: &str, base_url: &str) -> Result<Vec<Song>, CatalogError> {
    if html.trim().is_empty() {
        return Err(CatalogError::Parse("empty response body".to_string()));
    }

    let songs = ANCHOR_TAG
        .find_iter(html)
        .map(|tag| parse_attributes(tag.as_str()))
        .filter(is_play_button)
        .filter_map(|attributes| song_from_attributes(&attributes, base_url))
        .collect();

    Ok(songs)
}

fn parse_attributes(tag: &str) -> HashMap<String, String> {
    ATTRIBUTE
        .captures_iter(tag)
        .map(|caps| {
            let raw = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            (caps[1].to_ascii_lowercase(), decode_entities(raw))
        })
        .collect()
}

fn is_play_button(attributes: &HashMap<String, String>) -> bool {
    attributes
        .get("class")
        .is_some_and(|class| class.split_whitespace().any(|c| c == PLAY_BUTTON_CLASS))
}

fn song_from_attributes(attributes: &HashMap<String, String>, base_url: &str) -> Option<Song> {
    let non_empty = |key: &str| {
        attributes
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    let name = non_empty("data-track")?;
    let id = non_empty("data-tid");
    let download_url = id
        .as_ref()
        .map(|id| format!("{}/track/download/{}", base_url, id));

    Some(Song {
        id,
        name,
        artists: non_empty("data-artistraw")
            .map(|raw| parse_artists(&raw))
            .unwrap_or_default(),
        genre: non_empty("data-genre"),
        cover_url: non_empty("data-cover"),
        preview_url: non_empty("data-url").or_else(|| non_empty("data-preview")),
        download_url,
    })
}

/// `data-artistraw` is either a plain comma separated list or a list of
/// artist page links.
fn parse_artists(raw: &str) -> Vec<Artist> {
    let linked: Vec<Artist> = ARTIST_LINK
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = decode_entities(caps[2].trim());
            if name.is_empty() {
                return None;
            }
            let url = caps[1].trim();
            Some(Artist {
                name,
                url: (!url.is_empty()).then(|| url.to_string()),
            })
        })
        .collect();

    if !linked.is_empty() {
        return linked;
    }

    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Artist::named)
        .collect()
}

fn decode_entities(value: &str) -> String {
    let decoded = NUMERIC_ENTITY.replace_all(value, |caps: &Captures| {
        let code = &caps[1];
        let parsed = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        parsed
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    // &amp; goes last so "&amp;lt;" decodes to "&lt;" and not "<".
    decoded
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
