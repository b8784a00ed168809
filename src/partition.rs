//! Order partitioning.
//!
//! Slides only compete for adjacency with slides of the same tag count.
//! Buckets are keyed by tag count with no upper bound and iterate in
//! ascending tag-count order. Within a bucket, slides keep encounter order.

use std::collections::BTreeMap;

use crate::types::Slide;

/// Slides sharing one tag count.
#[derive(Debug, Clone)]
pub struct Bucket {
    /// Tag count shared by every slide in the bucket.
    pub tag_count: usize,
    /// Slides in encounter (or, once ordered, presentation) order.
    pub slides: Vec<Slide>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new(tag_count: usize) -> Self {
        Self { tag_count, slides: Vec::new() }
    }

    /// Positional index of the bucket, `tag_count - 1`.
    ///
    /// Slides without tags have no index.
    pub fn index(&self) -> Option<usize> {
        self.tag_count.checked_sub(1)
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// All buckets of a run, ascending by tag count.
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    buckets: BTreeMap<usize, Bucket>,
}

impl Buckets {
    /// Create an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide to the bucket of its tag count.
    pub fn insert(&mut self, slide: Slide) {
        let tag_count = slide.tag_count();
        self.buckets
            .entry(tag_count)
            .or_insert_with(|| Bucket::new(tag_count))
            .slides
            .push(slide);
    }

    /// Bucket for a tag count, if any slide has that many tags.
    pub fn get(&self, tag_count: usize) -> Option<&Bucket> {
        self.buckets.get(&tag_count)
    }

    /// Bucket at positional index `tag_count - 1`.
    pub fn by_index(&self, index: usize) -> Option<&Bucket> {
        self.get(index + 1)
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether there are no slides at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total slides across buckets.
    pub fn slide_count(&self) -> usize {
        self.buckets.values().map(Bucket::len).sum()
    }

    /// Iterate buckets in ascending tag-count order.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.values()
    }
}

impl IntoIterator for Buckets {
    type Item = Bucket;
    type IntoIter = std::collections::btree_map::IntoValues<usize, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_values()
    }
}

impl FromIterator<Slide> for Buckets {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        let mut buckets = Self::new();
        for slide in iter {
            buckets.insert(slide);
        }
        buckets
    }
}

/// Partition slides by tag count.
pub fn split_by_order(slides: Vec<Slide>) -> Buckets {
    slides.into_iter().collect()
}
