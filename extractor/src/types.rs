/// One raw row as loaded from the geographic data file, before extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub description: String,
}

impl Placemark {
    pub fn new(name: String, lat: f64, lon: f64, description: String) -> Self {
        Self {
            name,
            lat,
            lon,
            description,
        }
    }
}

/// One point of interest after extraction, holding only clean presentational
/// strings. Kept at the same ordinal position as its source [`Placemark`] so
/// index-based lookup during hover stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub image_url: String,
    pub member: String,
    pub address: String,
    pub hours: String,
    pub holidays: String,
}

/// How internal `<br>` markers inside the address are rendered into the
/// normalized string. The two tooltip layouts in circulation disagree on
/// this, so both stay available as an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressStyle {
    /// Replace each `<br>` with a single space.
    #[default]
    SpaceJoined,
    /// Replace each `<br>` with a newline; the tooltip re-splits into lines.
    MultiLine,
}

impl AddressStyle {
    pub(crate) fn separator(&self) -> &'static str {
        match self {
            AddressStyle::SpaceJoined => " ",
            AddressStyle::MultiLine => "\n",
        }
    }
}

/// Options applied uniformly to every record during extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub address_style: AddressStyle,
}
