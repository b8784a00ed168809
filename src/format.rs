//! Text adapters for the contest photo list and slideshow listing.
//!
//! Input:
//!
//! ```text
//! 4
//! H 3 cat beach sun
//! V 2 selfie smile
//! V 2 garden selfie
//! H 2 garden cat
//! ```
//!
//! Output: the slide count, then one line of space-separated photo ids per
//! slide.

use std::fmt::Write as _;

use tracing::warn;

use crate::types::{Orientation, Photo, PhotoId, Slide};

/// Error parsing a photo list. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No header line.
    #[error("Missing photo count header")]
    MissingHeader,
    /// Header is not a number.
    #[error("Invalid photo count on line {line}: {value:?}")]
    InvalidCount {
        /// Offending line.
        line: usize,
        /// Raw value.
        value: String,
    },
    /// Orientation marker is neither `H` nor `V`.
    #[error("Unknown orientation on line {line}: {marker:?}")]
    UnknownOrientation {
        /// Offending line.
        line: usize,
        /// Raw marker.
        marker: String,
    },
    /// More photos than [`PhotoId`] can number.
    #[error("Too many photos: line {line} exceeds the photo id range")]
    TooManyPhotos {
        /// First line without an id.
        line: usize,
    },
}

/// Id of the photo at arrival position `index`, read from `line`.
fn photo_id(index: usize, line: usize) -> Result<PhotoId, FormatError> {
    u32::try_from(index)
        .map(PhotoId::new)
        .map_err(|_| FormatError::TooManyPhotos { line })
}

/// Parse a photo list.
///
/// Blank lines are skipped and do not consume a photo id. A line whose
/// second field is not a number is read as orientation followed by tags.
/// A header or declared tag count that disagrees with the data is logged.
pub fn parse_photos(input: &str) -> Result<Vec<Photo>, FormatError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(FormatError::MissingHeader)?;
    let declared: usize = header.parse().map_err(|_| FormatError::InvalidCount {
        line: header_line,
        value: header.to_string(),
    })?;

    // The header is untrusted; never reserve more than one photo per line.
    let mut photos = Vec::with_capacity(declared.min(input.lines().count()));
    for (line, text) in lines {
        let mut fields = text.split_whitespace();
        let marker = fields.next().unwrap_or_default();
        let orientation = Orientation::from_marker(marker).ok_or_else(|| FormatError::UnknownOrientation {
            line,
            marker: marker.to_string(),
        })?;

        let mut rest: Vec<&str> = fields.collect();
        if let Some(count) = rest.first().and_then(|field| field.parse::<usize>().ok()) {
            rest.remove(0);
            if count != rest.len() {
                warn!(line, declared = count, found = rest.len(), "tag count mismatch");
            }
        }

        let id = photo_id(photos.len(), line)?;
        photos.push(Photo::new(id, orientation, rest.into_iter().map(str::to_string).collect()));
    }

    if photos.len() != declared {
        warn!(declared, found = photos.len(), "photo count mismatch");
    }

    Ok(photos)
}

fn write_ids(out: &mut String, slide: &Slide) {
    let mut first = true;
    for id in slide.photo_ids() {
        if !first {
            out.push(' ');
        }
        first = false;
        // Writing to a String cannot fail.
        let _ = write!(out, "{id}");
    }
}

/// Render slides as the slideshow listing.
pub fn render(slides: &[Slide]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", slides.len());
    for slide in slides {
        write_ids(&mut out, slide);
        out.push('\n');
    }
    out
}

/// Render slides with each slide's combined tag list, for inspection.
pub fn render_debug(slides: &[Slide]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", slides.len());
    for slide in slides {
        write_ids(&mut out, slide);
        out.push('[');
        for tag in slide.tags() {
            out.push(' ');
            out.push_str(tag);
        }
        out.push_str(" ]\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlideId;

    const SAMPLE: &str = "4\nH 3 cat beach sun\nV 2 selfie smile\nV 2 garden selfie\nH 2 garden cat\n";

    #[test]
    fn test_parse_sample() {
        let photos = parse_photos(SAMPLE).unwrap();

        assert_eq!(photos.len(), 4);
        assert_eq!(photos[0].orientation, Orientation::Horizontal);
        assert_eq!(photos[0].tags, vec!["cat", "beach", "sun"]);
        assert_eq!(photos[2].id, PhotoId::new(2));
        assert!(photos[1].is_vertical());
    }

    #[test]
    fn test_parse_tags_without_count() {
        let photos = parse_photos("1\nV a b\n").unwrap();
        assert_eq!(photos[0].tags, vec!["a", "b"]);
    }

    #[test]
    fn test_blank_lines_skip_ids() {
        let photos = parse_photos("2\n\nH 1 a\n\n   \nV 1 b\n").unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[1].id, PhotoId::new(1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_photos(""), Err(FormatError::MissingHeader));
        assert!(matches!(parse_photos("four\n"), Err(FormatError::InvalidCount { line: 1, .. })));
        assert!(matches!(
            parse_photos("1\nX 1 a\n"),
            Err(FormatError::UnknownOrientation { line: 2, .. })
        ));
    }

    #[test]
    fn test_photo_id_range() {
        assert_eq!(photo_id(7, 9), Ok(PhotoId::new(7)));
        assert_eq!(photo_id(u32::MAX as usize, 2), Ok(PhotoId::new(u32::MAX)));

        let overflow = (u32::MAX as u64 + 1) as usize;
        if overflow != 0 {
            assert_eq!(photo_id(overflow, 5), Err(FormatError::TooManyPhotos { line: 5 }));
        }
    }

    #[test]
    fn test_oversized_header_is_not_trusted() {
        let photos = parse_photos("4294967295\nH 1 a\n").unwrap();
        assert_eq!(photos.len(), 1);
    }

    #[test]
    fn test_render() {
        let a = Photo::horizontal(0, ["cat", "sun"]);
        let b = Photo::vertical(1, ["selfie"]);
        let c = Photo::vertical(2, ["garden"]);
        let slides = vec![Slide::single(SlideId::new(0), &a), Slide::pair(SlideId::new(1), &b, &c)];

        assert_eq!(render(&slides), "2\n0\n1 2\n");
        assert_eq!(render_debug(&slides), "2\n0[ cat sun ]\n1 2[ selfie garden ]\n");
        assert_eq!(render(&[]), "0\n");
    }
}
