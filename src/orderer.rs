//! Bucket ordering by iterative tag elimination.
//!
//! Every slide starts with one *unit* per tag it carries. Units are laid out
//! in tag order, so slides sharing a tag sit next to each other. Each round
//! scores every unit by the interest between its slide and the slides of its
//! two neighbouring units, then every slide keeps the better-scoring half of
//! its units (rounded up). Once each slide is down to one unit, the tag order
//! of the surviving units is the bucket's presentation order.
//!
//! ## Algorithm
//!
//! 1. Expand slides into units `(slide, tag)`
//! 2. Stable sort units by tag
//! 3. While some slide owns more than one unit:
//!    - Score units from a fresh zeroed table: for each adjacent pair in the
//!      tag sequence, add `interest(left, right)` to both
//!    - Per slide: stable sort its units by descending score and drop all
//!      but `ceil(n / 2)`
//!    - Remove dropped units from the tag sequence (order is preserved)
//! 4. Map surviving units back to slides
//!
//! Each round halves every multi-unit slide, so the loop runs
//! `O(log max_tags)` rounds of `O(units)` interest evaluations.

use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use crate::interest::interest;
use crate::partition::Bucket;
use crate::types::Slide;

/// Statistics of one bucket ordering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderingStats {
    /// Tag count of the bucket.
    pub tag_count: usize,
    /// Slides ordered.
    pub slides: usize,
    /// Units created before the first round.
    pub initial_units: usize,
    /// Elimination rounds run.
    pub rounds: usize,
}

/// A `(slide, tag)` pairing. `slide` indexes the bucket's slide list.
#[derive(Debug, Clone, Copy)]
struct Unit<'a> {
    slide: usize,
    tag: &'a str,
}

/// Working state of one ordering pass. Owned by a single call.
struct Elimination<'a> {
    slides: &'a [Slide],
    units: Vec<Unit<'a>>,
    /// Live units in tag order.
    sequence: Vec<usize>,
    /// Live units of each slide, best first after the first round.
    owned: Vec<Vec<usize>>,
}

impl<'a> Elimination<'a> {
    fn new(slides: &'a [Slide]) -> Self {
        let mut units = Vec::new();
        let mut owned = Vec::with_capacity(slides.len());

        for (slide, s) in slides.iter().enumerate() {
            let mut mine = Vec::with_capacity(s.tag_count());
            for tag in s.tags() {
                mine.push(units.len());
                units.push(Unit { slide, tag: tag.as_str() });
            }
            owned.push(mine);
        }

        let mut sequence: Vec<usize> = (0..units.len()).collect();
        sequence.sort_by(|&a, &b| units[a].tag.cmp(units[b].tag));

        Self { slides, units, sequence, owned }
    }

    fn needs_reduction(&self) -> bool {
        self.owned.iter().any(|mine| mine.len() > 1)
    }

    fn scores(&self) -> Vec<u64> {
        let mut scores = vec![0u64; self.units.len()];

        for pair in self.sequence.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let gain = interest(
                &self.slides[self.units[left].slide],
                &self.slides[self.units[right].slide],
            );
            scores[left] += u64::from(gain);
            scores[right] += u64::from(gain);
        }

        scores
    }

    fn round(&mut self) {
        let scores = self.scores();
        let mut dropped = vec![false; self.units.len()];

        for mine in &mut self.owned {
            // Stable: ties keep the order of the previous round.
            mine.sort_by_key(|&unit| Reverse(scores[unit]));
            let keep = mine.len().div_ceil(2);
            for unit in mine.drain(keep..) {
                dropped[unit] = true;
            }
        }

        self.sequence.retain(|&unit| !dropped[unit]);
    }

    fn live_units(&self) -> usize {
        self.sequence.len()
    }

    /// Slide indices in presentation order.
    ///
    /// Slides without tags own no unit and follow in encounter order.
    fn into_order(self) -> Vec<usize> {
        let mut order: Vec<usize> = self.sequence.iter().map(|&unit| self.units[unit].slide).collect();
        order.extend(
            self.owned
                .iter()
                .enumerate()
                .filter(|(_, mine)| mine.is_empty())
                .map(|(slide, _)| slide),
        );
        order
    }
}

/// Order slides that share one tag count, returning pass statistics.
///
/// The result is always a permutation of the input.
pub fn order_slides_with_stats(slides: Vec<Slide>) -> (Vec<Slide>, OrderingStats) {
    let mut elimination = Elimination::new(&slides);
    let mut stats = OrderingStats {
        tag_count: slides.first().map(Slide::tag_count).unwrap_or(0),
        slides: slides.len(),
        initial_units: elimination.live_units(),
        rounds: 0,
    };

    while elimination.needs_reduction() {
        debug!(
            round = stats.rounds,
            live_units = elimination.live_units(),
            slides = stats.slides,
            "elimination round"
        );
        elimination.round();
        stats.rounds += 1;
    }

    let order = elimination.into_order();
    let mut slots: Vec<Option<Slide>> = slides.into_iter().map(Some).collect();
    let ordered = order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect();

    (ordered, stats)
}

/// Order slides that share one tag count.
pub fn order_slides(slides: Vec<Slide>) -> Vec<Slide> {
    order_slides_with_stats(slides).0
}

/// Order the slides of a bucket in place.
pub fn order_bucket(mut bucket: Bucket) -> (Bucket, OrderingStats) {
    let (slides, mut stats) = order_slides_with_stats(std::mem::take(&mut bucket.slides));
    stats.tag_count = bucket.tag_count;
    debug!(
        tag_count = stats.tag_count,
        slides = stats.slides,
        units = stats.initial_units,
        rounds = stats.rounds,
        "bucket ordered"
    );
    bucket.slides = slides;
    (bucket, stats)
}
