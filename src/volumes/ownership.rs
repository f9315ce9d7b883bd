//! Ownership resolution
//!
//! Picks the single pipe credited with a depth segment. Every consumer
//! (outer accumulator, inner-string engine, casing breakdown) goes through
//! [`resolve_owner`] so they can never disagree about who owns a range.
//!
//! Rules, applied to the active pipes overlapping the segment:
//! 1. A conductor is suppressed while a surface casing is in use, a surface
//!    casing while an intermediate casing is in use.
//! 2. The smallest inner diameter wins (innermost wins), whatever the
//!    main-wellbore / supplemental category of the candidates.
//! 3. Pipes without a usable inner diameter rank as infinitely wide.
//! 4. Equal diameters: a supplemental string beats a main-wellbore string,
//!    then the higher draw z-order, then the earlier input position.

use std::cmp::Ordering;

use crate::types::{PipeCategory, PipeDescriptor, SuppressionFlags};

use super::segmenter::DepthSegment;

/// Filters applied before ranking candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OwnershipRules {
    pub suppression: SuppressionFlags,
    /// Skip roles that cannot contain an inner string (upper completion)
    pub outer_containers_only: bool,
}

impl OwnershipRules {
    pub fn new(suppression: SuppressionFlags) -> Self {
        Self {
            suppression,
            outer_containers_only: false,
        }
    }

    /// Rules for resolving the container around an inner string.
    pub fn for_inner_string(suppression: SuppressionFlags) -> Self {
        Self {
            suppression,
            outer_containers_only: true,
        }
    }

    fn admits(&self, pipe: &PipeDescriptor) -> bool {
        pipe.contributes()
            && !self.suppression.suppresses(pipe.role)
            && (!self.outer_containers_only || pipe.role.is_outer_container())
    }
}

fn ranking_diameter(pipe: &PipeDescriptor) -> f64 {
    pipe.bore_diameter().unwrap_or(f64::INFINITY)
}

fn category_rank(category: PipeCategory) -> u8 {
    match category {
        PipeCategory::Supplemental => 0,
        PipeCategory::MainWellbore => 1,
    }
}

/// Total order on ownership candidates; the `Less` side wins.
pub fn compare_candidates(a: (usize, &PipeDescriptor), b: (usize, &PipeDescriptor)) -> Ordering {
    let (ai, ap) = a;
    let (bi, bp) = b;
    ranking_diameter(ap)
        .total_cmp(&ranking_diameter(bp))
        .then_with(|| category_rank(ap.role.category()).cmp(&category_rank(bp.role.category())))
        .then_with(|| bp.role.z_order().cmp(&ap.role.z_order()))
        .then_with(|| ai.cmp(&bi))
}

/// Indices of the pipes competing for `segment`.
pub fn candidates<'a>(
    pipes: &'a [PipeDescriptor],
    segment: DepthSegment,
    rules: OwnershipRules,
) -> impl Iterator<Item = (usize, &'a PipeDescriptor)> + 'a {
    pipes
        .iter()
        .enumerate()
        .filter(move |(_, p)| rules.admits(p) && p.overlaps(segment.start, segment.end))
}

/// The owning pipe index for `segment`, or `None` when nothing covers it.
pub fn resolve_owner(
    pipes: &[PipeDescriptor],
    segment: DepthSegment,
    rules: OwnershipRules,
) -> Option<usize> {
    candidates(pipes, segment, rules)
        .min_by(|a, b| compare_candidates(*a, *b))
        .map(|(i, _)| i)
}
