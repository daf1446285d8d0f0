use crate::errors::{ExtractionError, Field, LoadError};
use crate::markers::{
    ADDRESS_RE, BR, FULL_WIDTH_SPACE, HOLIDAYS_LABEL, HOURS_RE, IMG_RE, MEMBER_RE, NO_HOLIDAYS,
};
use crate::types::{ExtractOptions, Placemark, Shop};

use regex::Regex;

/// Derives the five tooltip fields from one placemark description.
///
/// Pure function over its input; applied independently to every record.
/// The `image_url`, `member`, `address` and `hours` markers are mandatory:
/// a description missing any of them yields an [`ExtractionError`] naming
/// the field, never a silently-empty value.
pub fn extract(raw: &Placemark, options: &ExtractOptions) -> Result<Shop, ExtractionError> {
    let image_url = capture(&IMG_RE, &raw.description, Field::ImageUrl)?
        .trim()
        .to_string();

    let member = capture(&MEMBER_RE, &raw.description, Field::Member)?
        .trim()
        .to_string();

    let address = capture(&ADDRESS_RE, &raw.description, Field::Address)?
        .trim()
        .replace(BR, options.address_style.separator());

    // Hours and holidays come out of one captured segment, split on the
    // closed-days label. The label itself is optional.
    let tail = capture(&HOURS_RE, &raw.description, Field::Hours)?;
    let (hours_src, holidays_src) = match tail.split_once(HOLIDAYS_LABEL) {
        Some((a, b)) => (a, Some(b)),
        None => (tail, None),
    };

    let hours = clean_hours(hours_src);
    let holidays = match holidays_src {
        Some(b) => b.split(BR).next().unwrap_or_default().to_string(),
        None => NO_HOLIDAYS.to_string(),
    };

    Ok(Shop {
        name: raw.name.clone(),
        lat: raw.lat,
        lon: raw.lon,
        image_url,
        member,
        address,
        hours,
        holidays,
    })
}

/// Runs [`extract`] eagerly over every row, in order, failing fast.
///
/// The first row whose description violates the marker invariant aborts the
/// whole load; the error carries the zero-based row index so the offending
/// record in the input file can be found.
pub fn extract_all(
    placemarks: &[Placemark],
    options: &ExtractOptions,
) -> Result<Vec<Shop>, LoadError> {
    placemarks
        .iter()
        .enumerate()
        .map(|(row, raw)| extract(raw, options).map_err(|source| LoadError::Row { row, source }))
        .collect()
}

fn capture<'a>(re: &Regex, haystack: &'a str, field: Field) -> Result<&'a str, ExtractionError> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(ExtractionError::missing(field))
}

/// Normalizes the hours segment into its canonical presentation form:
/// trailing `<br>` text and whitespace trimmed, full-width spaces removed,
/// colon and tilde glyphs unified, remaining `<br>` markers turned into
/// single spaces.
fn clean_hours(raw: &str) -> String {
    raw.trim_end_matches(['<', 'b', 'r', '>'])
        .trim()
        .replace(FULL_WIDTH_SPACE, "")
        .replace('：', ":")
        .replace('~', "～")
        .replace(" ～ ", "～")
        .replace(BR, " ")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::AddressStyle;

    fn placemark(description: &str) -> Placemark {
        Placemark::new(
            String::from("辻写真館"),
            35.0967,
            138.8636,
            description.to_string(),
        )
    }

    fn well_formed() -> Placemark {
        placemark(
            "<img src=\"https://example.com/photo.jpg\" height=\"200\" width=\"300\">\
             <br>メンバー／桜内梨子<br>住所／静岡県沼津市上土町36<br>大手町ビル1F\
             <br>営業時間／9：00~18：00<br>定休日／水曜日<br>備考／スタンプは店頭",
        )
    }

    #[test]
    fn extracts_all_fields_from_well_formed_description() {
        let shop = extract(&well_formed(), &ExtractOptions::default()).unwrap();

        assert_eq!(shop.name, "辻写真館");
        assert_eq!(shop.image_url, "https://example.com/photo.jpg");
        assert_eq!(shop.member, "桜内梨子");
        assert_eq!(shop.address, "静岡県沼津市上土町36 大手町ビル1F");
        assert_eq!(shop.hours, "9:00～18:00");
        assert_eq!(shop.holidays, "水曜日");
    }

    #[test]
    fn no_field_contains_a_raw_line_break_marker() {
        let shop = extract(&well_formed(), &ExtractOptions::default()).unwrap();

        for field in [
            &shop.image_url,
            &shop.member,
            &shop.address,
            &shop.hours,
            &shop.holidays,
        ] {
            assert!(!field.contains("<br>"), "residual <br> in {:?}", field);
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let raw = well_formed();
        let first = extract(&raw, &ExtractOptions::default()).unwrap();
        let second = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn multiline_address_style_keeps_line_structure() {
        let options = ExtractOptions {
            address_style: AddressStyle::MultiLine,
        };
        let shop = extract(&well_formed(), &options).unwrap();
        assert_eq!(shop.address, "静岡県沼津市上土町36\n大手町ビル1F");
    }

    #[test]
    fn holidays_default_when_label_is_absent() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／渡辺曜<br>住所／静岡県沼津市千本港町101\
             <br>営業時間／10：00~20：00",
        );
        let shop = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(shop.holidays, "なし");
    }

    #[test]
    fn hours_canonicalizes_colon_and_tilde() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／渡辺曜<br>住所／静岡県沼津市千本港町101\
             <br>営業時間／10：00~20：00<br>定休日／なし",
        );
        let shop = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(shop.hours, "10:00～20:00");
    }

    #[test]
    fn hours_collapses_spaced_full_width_tilde() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／高海千歌<br>住所／静岡県沼津市内浦三津19\
             <br>営業時間／8:30 ～ 17:30<br>定休日／不定休",
        );
        let shop = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(shop.hours, "8:30～17:30");
    }

    #[test]
    fn hours_removes_full_width_spaces() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／高海千歌<br>住所／静岡県沼津市内浦三津19\
             <br>営業時間／平日\u{3000}11:00～15:00<br>定休日／木曜日",
        );
        let shop = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(shop.hours, "平日11:00～15:00");
        assert!(!shop.hours.contains('\u{3000}'));
    }

    #[test]
    fn hours_turns_internal_line_breaks_into_spaces() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／小原鞠莉<br>住所／静岡県沼津市内浦長浜5\
             <br>営業時間／平日 11:00～15:00<br>土日 10:00～17:00<br>定休日／火曜日",
        );
        let shop = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(shop.hours, "平日 11:00～15:00 土日 10:00～17:00");
    }

    #[test]
    fn holidays_keeps_only_the_first_segment() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／津島善子<br>住所／静岡県沼津市大手町5-5\
             <br>営業時間／10:00～19:00<br>定休日／月曜日<br>祝日の場合は翌日",
        );
        let shop = extract(&raw, &ExtractOptions::default()).unwrap();
        assert_eq!(shop.holidays, "月曜日");
    }

    #[test]
    fn missing_image_tag_is_an_error_not_a_default() {
        let raw = placemark(
            "メンバー／黒澤ダイヤ<br>住所／静岡県沼津市魚町1<br>営業時間／9:00～17:00",
        );
        let err = extract(&raw, &ExtractOptions::default()).unwrap_err();
        assert_eq!(err, ExtractionError::missing(Field::ImageUrl));
        assert_eq!(err.field.as_str(), "image_url");
    }

    #[test]
    fn missing_member_marker_is_an_error() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>住所／静岡県沼津市魚町1<br>営業時間／9:00～17:00",
        );
        let err = extract(&raw, &ExtractOptions::default()).unwrap_err();
        assert_eq!(err.field, Field::Member);
    }

    #[test]
    fn missing_address_marker_is_an_error() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／黒澤ルビィ<br>営業時間／9:00～17:00",
        );
        let err = extract(&raw, &ExtractOptions::default()).unwrap_err();
        assert_eq!(err.field, Field::Address);
    }

    #[test]
    fn missing_hours_marker_is_an_error() {
        let raw = placemark(
            "<img src=\"https://example.com/p.jpg\" height=\"200\">\
             <br>メンバー／国木田花丸<br>住所／静岡県沼津市魚町1<br>営",
        );
        let err = extract(&raw, &ExtractOptions::default()).unwrap_err();
        assert_eq!(err.field, Field::Hours);
    }

    #[test]
    fn bulk_extraction_fails_fast_and_reports_row_and_field() {
        let rows = vec![
            well_formed(),
            placemark(
                "<img src=\"https://example.com/p.jpg\" height=\"200\">\
                 <br>住所／静岡県沼津市魚町1<br>営業時間／9:00～17:00",
            ),
        ];

        let err = extract_all(&rows, &ExtractOptions::default()).unwrap_err();
        match err {
            LoadError::Row { row, source } => {
                assert_eq!(row, 1);
                assert_eq!(source.field, Field::Member);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn bulk_extraction_preserves_ordinal_positions() {
        let first = well_formed();
        let second = placemark(
            "<img src=\"https://example.com/other.jpg\" height=\"150\">\
             <br>メンバー／松浦果南<br>住所／静岡県沼津市内浦重寺341\
             <br>営業時間／10:00～16:00<br>定休日／金曜日",
        );

        let shops = extract_all(&[first.clone(), second.clone()], &ExtractOptions::default())
            .unwrap();
        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].name, first.name);
        assert_eq!(shops[1].name, second.name);
        assert_eq!(shops[1].member, "松浦果南");
    }
}
