//! One-shot IP geolocation for the current-location marker.

use std::time::Duration;

use serde::Deserialize;
use walkers::Position;

// ip-api.com's free tier is HTTP-only; the coordinates are coarse,
// non-sensitive visualization data.
const ENDPOINT: &str = "http://ip-api.com/json/?fields=lat,lon";
const TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    lat: f64,
    lon: f64,
}

/// Resolves the viewer's approximate position from their IP address.
///
/// Called once at startup, before the event loop. Any failure or timeout
/// degrades to `None`; the caller omits the marker.
pub fn current_position() -> Option<Position> {
    let body = ureq::get(ENDPOINT)
        .timeout(TIMEOUT)
        .call()
        .ok()?
        .into_string()
        .ok()?;

    parse_response(&body)
}

fn parse_response(body: &str) -> Option<Position> {
    let response: IpApiResponse = serde_json::from_str(body).ok()?;
    Some(Position::from_lat_lon(response.lat, response.lon))
}
