//! Minimal KML placemark reader.
//!
//! The viewer only needs one thing from the input file: rows with a point
//! geometry and a description string. This reader walks `<Placemark>` blocks
//! and pulls out `<name>`, `<description>` and `<Point><coordinates>`,
//! handling CDATA-wrapped and entity-escaped description bodies. Placemarks
//! without a point geometry (folders, routes) are skipped.

use std::fs;
use std::path::Path;

use crate::errors::LoadError;
use crate::types::Placemark;

const PLACEMARK_OPEN: &str = "<Placemark";
const PLACEMARK_CLOSE: &str = "</Placemark>";
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Reads every point placemark from a KML file, preserving document order.
pub fn read_placemarks(path: &Path) -> Result<Vec<Placemark>, LoadError> {
    let document = fs::read_to_string(path)?;
    parse_placemarks(&document)
}

/// Parses every point placemark out of an in-memory KML document.
pub fn parse_placemarks(document: &str) -> Result<Vec<Placemark>, LoadError> {
    let mut placemarks = Vec::new();
    let mut rest = document;

    while let Some(start) = rest.find(PLACEMARK_OPEN) {
        let after_open = &rest[start..];
        let end = match after_open.find(PLACEMARK_CLOSE) {
            Some(end) => end,
            None => break,
        };
        let block = &after_open[..end];

        if let Some(placemark) = parse_block(block)? {
            placemarks.push(placemark);
        }

        rest = &after_open[end + PLACEMARK_CLOSE.len()..];
    }

    Ok(placemarks)
}

/// Parses one placemark block; `Ok(None)` means the block carries no point
/// geometry and should be skipped.
fn parse_block(block: &str) -> Result<Option<Placemark>, LoadError> {
    let name = tag_content(block, "name")
        .map(|raw| unescape(raw.trim()))
        .unwrap_or_default();

    let point = match tag_content(block, "Point") {
        Some(point) => point,
        None => return Ok(None),
    };
    let coordinates = tag_content(point, "coordinates")
        .ok_or_else(|| LoadError::BadCoordinates(name.clone()))?;
    let (lat, lon) =
        parse_coordinates(coordinates).ok_or_else(|| LoadError::BadCoordinates(name.clone()))?;

    let description = tag_content(block, "description")
        .map(description_text)
        .unwrap_or_default();

    Ok(Some(Placemark::new(name, lat, lon, description)))
}

/// Returns the text between `<tag ...>` and `</tag>`, or `None` if either
/// side is missing.
fn tag_content<'a>(block: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let open_at = block.find(&open)?;
    let content_at = open_at + block[open_at..].find('>')? + 1;
    let close_at = content_at + block[content_at..].find(&close)?;

    Some(&block[content_at..close_at])
}

/// KML stores point coordinates as `lon,lat[,altitude]`.
fn parse_coordinates(raw: &str) -> Option<(f64, f64)> {
    let mut parts = raw.trim().split(',');
    let lon: f64 = parts.next()?.trim().parse().ok()?;
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    Some((lat, lon))
}

/// Description bodies are either CDATA-wrapped raw HTML or entity-escaped.
fn description_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(inner) = trimmed
        .strip_prefix(CDATA_OPEN)
        .and_then(|s| s.strip_suffix(CDATA_CLOSE))
    {
        inner.to_string()
    } else {
        unescape(trimmed)
    }
}

fn unescape(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
