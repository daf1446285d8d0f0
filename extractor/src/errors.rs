use std::fmt;

/// Identifies which derived field an extraction failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ImageUrl,
    Member,
    Address,
    Hours,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ImageUrl => "image_url",
            Field::Member => "member",
            Field::Address => "address",
            Field::Hours => "hours",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A required marker pattern was not found in a placemark description.
///
/// The four fields `image_url`, `member`, `address` and `hours` are mandatory
/// for the tooltip, so a missing marker aborts extraction for the record
/// instead of producing a partially-empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionError {
    pub field: Field,
}

impl ExtractionError {
    pub fn missing(field: Field) -> Self {
        Self { field }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "required marker for field `{}` not found in description",
            self.field
        )
    }
}

impl std::error::Error for ExtractionError {}

/// Errors that can occur while loading and normalizing the shop table.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    /// A placemark declared a point geometry whose coordinates could not be parsed.
    BadCoordinates(String),
    /// Bulk extraction failed on a specific row. The row index is zero-based
    /// and matches the ordinal position of the placemark in the input file.
    Row {
        row: usize,
        source: ExtractionError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read input file: {}", e),
            LoadError::BadCoordinates(name) => {
                write!(f, "placemark '{}' has malformed coordinates", name)
            }
            LoadError::Row { row, source } => {
                write!(f, "row {}: {}", row, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Row { source, .. } => Some(source),
            LoadError::BadCoordinates(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}
