//! Slide types for the slideshow kernel.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::photo::{Photo, PhotoId};

/// Unique handle of a slide, assigned when the slide is composed.
///
/// Two slides with identical photos and tags still carry distinct ids.
/// Equality and hashing of [`Slide`] use this handle alone, so every slide of
/// one run must get its id from the same [`SlideComposer`](crate::compose::SlideComposer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlideId(u32);

impl SlideId {
    /// Create a new SlideId.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw handle.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide#{}", self.0)
    }
}

/// Shape of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideKind {
    /// One horizontal photo.
    Single,
    /// Two vertical photos.
    Pair,
}

/// One or two photos presented together.
///
/// The tag list is the concatenation of the photos' tag lists. Tags present
/// in both photos appear twice and count twice toward [`Slide::tag_count`].
#[derive(Debug, Clone, Serialize)]
pub struct Slide {
    id: SlideId,
    photos: Vec<PhotoId>,
    tags: Vec<String>,
    /// Sorted, deduplicated copy of `tags` for membership lookups.
    #[serde(skip)]
    lookup: Vec<String>,
}

impl Slide {
    /// Build a slide from one horizontal photo.
    ///
    /// `id` must be unique within the run; prefer [`SlideComposer`](crate::compose::SlideComposer).
    pub fn single(id: SlideId, photo: &Photo) -> Self {
        Self::from_parts(id, vec![photo.id], photo.tags.clone())
    }

    /// Build a slide from two vertical photos, `first` shown first.
    ///
    /// `id` must be unique within the run; prefer [`SlideComposer`](crate::compose::SlideComposer).
    pub fn pair(id: SlideId, first: &Photo, second: &Photo) -> Self {
        let mut tags = Vec::with_capacity(first.tags.len() + second.tags.len());
        tags.extend(first.tags.iter().cloned());
        tags.extend(second.tags.iter().cloned());
        Self::from_parts(id, vec![first.id, second.id], tags)
    }

    fn from_parts(id: SlideId, photos: Vec<PhotoId>, tags: Vec<String>) -> Self {
        let mut lookup = tags.clone();
        lookup.sort_unstable();
        lookup.dedup();
        Self { id, photos, tags, lookup }
    }

    /// Slide handle.
    pub fn id(&self) -> SlideId {
        self.id
    }

    /// Constituent photo ids, in display order.
    pub fn photo_ids(&self) -> &[PhotoId] {
        &self.photos
    }

    /// Combined tag list, duplicates included.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Size of the combined tag list. Fixed for the slide's lifetime.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Whether `tag` appears anywhere in this slide's tag list.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.lookup
            .binary_search_by(|entry| entry.as_str().cmp(tag))
            .is_ok()
    }

    /// Shape of the slide.
    pub fn kind(&self) -> SlideKind {
        if self.photos.len() == 2 {
            SlideKind::Pair
        } else {
            SlideKind::Single
        }
    }
}

// Identity is the handle, not the content.
impl PartialEq for Slide {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Slide {}

impl std::hash::Hash for Slide {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_concatenates_tags() {
        let a = Photo::vertical(0, ["x", "y"]);
        let b = Photo::vertical(1, ["y", "z"]);
        let slide = Slide::pair(SlideId::new(7), &a, &b);

        assert_eq!(slide.tags(), ["x", "y", "y", "z"]);
        assert_eq!(slide.tag_count(), 4);
        assert_eq!(slide.photo_ids(), [PhotoId::new(0), PhotoId::new(1)]);
        assert_eq!(slide.kind(), SlideKind::Pair);
    }

    #[test]
    fn test_has_tag() {
        let slide = Slide::single(SlideId::new(0), &Photo::horizontal(3, ["b", "a", "b"]));
        assert!(slide.has_tag("a"));
        assert!(slide.has_tag("b"));
        assert!(!slide.has_tag("c"));
        assert_eq!(slide.kind(), SlideKind::Single);
    }

    #[test]
    fn test_identity_is_handle() {
        let photo = Photo::horizontal(0, ["a"]);
        let s1 = Slide::single(SlideId::new(1), &photo);
        let s2 = Slide::single(SlideId::new(2), &photo);
        assert_ne!(s1, s2);
        assert_eq!(s1, s1.clone());
    }
}
