//! Interest between slides.
//!
//! ```text
//! common = |{ t ∈ tags(a) : t occurs in tags(b) }|   (counted over a's list)
//! interest(a, b) = min(|tags(a)| - common, common, |tags(b)| - common)
//! ```
//!
//! `common` walks `a`'s raw tag list and tests membership in `b`, so a tag
//! repeated in `a` counts once per occurrence. The score is therefore not
//! symmetric when tag lists carry duplicates.

use crate::types::Slide;

/// Number of entries in `a`'s tag list that also occur in `b`.
fn common_tags(a: &Slide, b: &Slide) -> usize {
    a.tags().iter().filter(|tag| b.has_tag(tag)).count()
}

/// Interest of showing `b` right after `a`.
pub fn interest(a: &Slide, b: &Slide) -> u32 {
    let common = common_tags(a, b);
    // Saturate: `common` may exceed |tags(b)| when `a` repeats a shared tag.
    let only_a = a.tag_count().saturating_sub(common);
    let only_b = b.tag_count().saturating_sub(common);
    only_a.min(common).min(only_b) as u32
}

/// Total interest over consecutive pairs of an ordered slide list.
pub fn deck_score(slides: &[Slide]) -> u64 {
    slides
        .windows(2)
        .map(|pair| u64::from(interest(&pair[0], &pair[1])))
        .sum()
}
