//! Delimiter constants and compiled patterns for the description markup.
//!
//! The descriptions are semi-structured HTML exported from a map-editing tool:
//! labeled fields separated by fixed Japanese delimiters and `<br>` line
//! breaks. The exact marker strings are load-bearing, so they live here as
//! named constants; changing a delimiter is a one-place edit.

use std::sync::LazyLock;

use regex::Regex;

/// Line-break marker used throughout the description markup.
pub const BR: &str = "<br>";

/// Label preceding the Aqours member name.
pub const MEMBER_LABEL: &str = "メンバー／";

/// Label preceding the street address.
pub const ADDRESS_LABEL: &str = "住所／";

/// Label preceding the business hours.
pub const HOURS_LABEL: &str = "営業時間／";

/// Label preceding the closed-days segment. Optional; a description without
/// it means the shop has no regular closed day.
pub const HOLIDAYS_LABEL: &str = "定休日／";

/// Value reported for `holidays` when [`HOLIDAYS_LABEL`] is absent.
pub const NO_HOLIDAYS: &str = "なし";

/// Full-width space (U+3000), stripped from the hours segment.
pub const FULL_WIDTH_SPACE: &str = "\u{3000}";

/// First `<img>` tag; captures the URL between `src="` and `" height`.
pub static IMG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img src="(.*?)" height"#).expect("pattern is hardcoded and valid")
});

/// Member name between the member label and the following `<br>住`.
pub static MEMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{MEMBER_LABEL}(.*?){BR}住")).expect("pattern is hardcoded and valid")
});

/// Address between the address label and the following `<br>営`.
pub static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{ADDRESS_LABEL}(.*?){BR}営")).expect("pattern is hardcoded and valid")
});

/// Everything after the hours label up to the end of the line. The closed-days
/// split happens afterwards, on the captured text.
pub static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{HOURS_LABEL}(.*)")).expect("pattern is hardcoded and valid"));
