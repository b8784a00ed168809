//! Photo types for the slideshow kernel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a photo, assigned by arrival order in the input.
///
/// A collection holds at most `u32::MAX + 1` photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhotoId(u32);

impl PhotoId {
    /// Create a new PhotoId.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PhotoId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Orientation of a photo.
///
/// Horizontal photos fill a slide alone; vertical photos are shown in pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Landscape photo, one per slide.
    Horizontal,
    /// Portrait photo, two per slide.
    Vertical,
}

impl Orientation {
    /// Parse orientation from its single-letter marker.
    pub fn from_marker(s: &str) -> Option<Self> {
        match s {
            "H" | "h" => Some(Self::Horizontal),
            "V" | "v" => Some(Self::Vertical),
            _ => None,
        }
    }

    /// Single-letter marker used by the text format.
    pub fn marker(&self) -> char {
        match self {
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// A tagged photo.
///
/// Tags keep their input order. Duplicate tags are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Arrival-order identifier.
    pub id: PhotoId,
    /// Orientation flag.
    pub orientation: Orientation,
    /// Opaque tags.
    pub tags: Vec<String>,
}

impl Photo {
    /// Create a new photo.
    pub fn new(id: PhotoId, orientation: Orientation, tags: Vec<String>) -> Self {
        Self { id, orientation, tags }
    }

    /// Convenience constructor for a horizontal photo.
    pub fn horizontal<I, T>(id: u32, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(PhotoId::new(id), Orientation::Horizontal, tags.into_iter().map(Into::into).collect())
    }

    /// Convenience constructor for a vertical photo.
    pub fn vertical<I, T>(id: u32, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(PhotoId::new(id), Orientation::Vertical, tags.into_iter().map(Into::into).collect())
    }

    /// Whether the photo is horizontal.
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// Whether the photo is vertical.
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Number of tags, duplicates included.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
