//! Slide composition.
//!
//! Horizontal photos become one slide each. Vertical photos are sorted by
//! tag count (stable) and paired by one of two strategies:
//!
//! - [`VerticalPairing::FirstSecond`]: neighbours `(0,1), (2,3), ...`; an odd
//!   photo out is the one with the most tags.
//! - [`VerticalPairing::LastFirst`]: smallest with largest, moving inwards;
//!   an odd photo out is the middle one.

use serde::{Deserialize, Serialize};

use crate::types::{Photo, Slide, SlideId};

/// Strategy for pairing vertical photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPairing {
    /// Pair consecutive photos after sorting by tag count.
    #[default]
    FirstSecond,
    /// Pair the fewest-tag photo with the most-tag photo, moving inwards.
    LastFirst,
}

impl VerticalPairing {
    /// Parse a pairing name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_second" => Some(Self::FirstSecond),
            "last_first" => Some(Self::LastFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for VerticalPairing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstSecond => write!(f, "first_second"),
            Self::LastFirst => write!(f, "last_first"),
        }
    }
}

/// Turns photos into slides, handing out a fresh [`SlideId`] per slide.
///
/// Reuse one composer for every slide of a run so handles stay unique.
#[derive(Debug, Default)]
pub struct SlideComposer {
    next_id: u32,
}

impl SlideComposer {
    /// Create a composer whose first slide gets handle 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slides composed so far.
    pub fn composed(&self) -> u32 {
        self.next_id
    }

    fn allocate(&mut self) -> SlideId {
        let id = SlideId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// One slide per horizontal photo, in arrival order.
    pub fn compose_horizontal(&mut self, photos: &[Photo]) -> Vec<Slide> {
        photos
            .iter()
            .filter(|photo| photo.is_horizontal())
            .map(|photo| Slide::single(self.allocate(), photo))
            .collect()
    }

    /// Pair vertical photos with the given strategy.
    pub fn compose_vertical(&mut self, photos: &[Photo], pairing: VerticalPairing) -> Vec<Slide> {
        match pairing {
            VerticalPairing::FirstSecond => self.compose_vertical_first_second(photos),
            VerticalPairing::LastFirst => self.compose_vertical_last_first(photos),
        }
    }

    /// Pair sorted vertical photos `(0,1), (2,3), ...`.
    pub fn compose_vertical_first_second(&mut self, photos: &[Photo]) -> Vec<Slide> {
        let verticals = sorted_verticals(photos);
        let mut slides = Vec::with_capacity(verticals.len() / 2);

        for pair in verticals.chunks_exact(2) {
            slides.push(Slide::pair(self.allocate(), pair[0], pair[1]));
        }

        slides
    }

    /// Pair sorted vertical photos from both ends towards the middle.
    pub fn compose_vertical_last_first(&mut self, photos: &[Photo]) -> Vec<Slide> {
        let verticals = sorted_verticals(photos);
        let mut slides = Vec::with_capacity(verticals.len() / 2);

        if verticals.is_empty() {
            return slides;
        }

        let (mut first, mut last) = (0, verticals.len() - 1);
        while first < last {
            slides.push(Slide::pair(self.allocate(), verticals[first], verticals[last]));
            first += 1;
            last -= 1;
        }

        slides
    }

    /// Horizontal slides followed by vertical pairs.
    pub fn compose(&mut self, photos: &[Photo], pairing: VerticalPairing) -> Vec<Slide> {
        let mut slides = self.compose_horizontal(photos);
        slides.extend(self.compose_vertical(photos, pairing));
        slides
    }
}

/// Vertical photos ordered by ascending tag count, ties in arrival order.
fn sorted_verticals(photos: &[Photo]) -> Vec<&Photo> {
    let mut verticals: Vec<&Photo> = photos.iter().filter(|photo| photo.is_vertical()).collect();
    verticals.sort_by_key(|photo| photo.tag_count());
    verticals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PhotoId, SlideKind};

    fn vertical(id: u32, tag_count: usize) -> Photo {
        Photo::vertical(id, (0..tag_count).map(|i| format!("t{id}_{i}")))
    }

    fn ids(slide: &Slide) -> Vec<u32> {
        slide.photo_ids().iter().map(PhotoId::as_u32).collect()
    }

    #[test]
    fn test_horizontal_preserves_order() {
        let photos = vec![
            Photo::horizontal(0, ["a"]),
            Photo::vertical(1, ["b"]),
            Photo::horizontal(2, ["c"]),
        ];
        let mut composer = SlideComposer::new();
        let slides = composer.compose_horizontal(&photos);

        assert_eq!(slides.len(), 2);
        assert_eq!(ids(&slides[0]), vec![0]);
        assert_eq!(ids(&slides[1]), vec![2]);
        assert!(slides.iter().all(|s| s.kind() == SlideKind::Single));
    }

    #[test]
    fn test_first_second_drops_largest() {
        // Shuffled on purpose: sorting must restore tag-count order.
        let photos = vec![vertical(4, 5), vertical(0, 1), vertical(2, 3), vertical(1, 2), vertical(3, 4)];
        let slides = SlideComposer::new().compose_vertical_first_second(&photos);

        assert_eq!(slides.len(), 2);
        assert_eq!(ids(&slides[0]), vec![0, 1]);
        assert_eq!(ids(&slides[1]), vec![2, 3]);
    }

    #[test]
    fn test_last_first_drops_middle() {
        let photos = (0..5).map(|i| vertical(i, i as usize + 1)).collect::<Vec<_>>();
        let slides = SlideComposer::new().compose_vertical_last_first(&photos);

        assert_eq!(slides.len(), 2);
        assert_eq!(ids(&slides[0]), vec![0, 4]);
        assert_eq!(ids(&slides[1]), vec![1, 3]);
    }

    #[test]
    fn test_empty_and_single_vertical() {
        let mut composer = SlideComposer::new();
        assert!(composer.compose_vertical_first_second(&[]).is_empty());
        assert!(composer.compose_vertical_last_first(&[]).is_empty());
        assert!(composer.compose_horizontal(&[]).is_empty());

        let one = vec![vertical(0, 2)];
        assert!(composer.compose_vertical_first_second(&one).is_empty());
        assert!(composer.compose_vertical_last_first(&one).is_empty());
        assert_eq!(composer.composed(), 0);
    }

    #[test]
    fn test_ids_are_unique_across_calls() {
        let photos = vec![
            Photo::horizontal(0, ["a"]),
            vertical(1, 1),
            vertical(2, 1),
        ];
        let mut composer = SlideComposer::new();
        let slides = composer.compose(&photos, VerticalPairing::FirstSecond);

        assert_eq!(slides.len(), 2);
        assert_ne!(slides[0].id(), slides[1].id());
        assert_eq!(composer.composed(), 2);
    }

    #[test]
    fn test_one_composer_never_reuses_ids() {
        let photos: Vec<Photo> = (0..9)
            .map(|i| if i % 2 == 0 { Photo::horizontal(i, ["a"]) } else { vertical(i, 1) })
            .collect();
        let mut composer = SlideComposer::new();

        let mut slides = composer.compose_horizontal(&photos);
        slides.extend(composer.compose_vertical_first_second(&photos));
        slides.extend(composer.compose_vertical_last_first(&photos));

        let unique: std::collections::HashSet<_> = slides.iter().collect();
        assert_eq!(slides.len(), 5 + 2 + 2);
        assert_eq!(unique.len(), slides.len());
        assert_eq!(composer.composed() as usize, slides.len());
    }

    #[test]
    fn test_pairing_from_str() {
        assert_eq!(VerticalPairing::from_str("last-first"), Some(VerticalPairing::LastFirst));
        assert_eq!(VerticalPairing::from_str("FIRST_SECOND"), Some(VerticalPairing::FirstSecond));
        assert_eq!(VerticalPairing::from_str("zigzag"), None);
        assert_eq!(VerticalPairing::default().to_string(), "first_second");
    }
}
