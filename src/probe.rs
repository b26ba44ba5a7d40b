//! Sequential block classification over the membership-test primitive.
//!
//! The environment offers no "read the block kind" call, only the unary
//! membership test [`TurtleEnv::matches`]. [`classify`] synthesizes a total
//! classification function from that single primitive by probing the
//! enumeration in protocol order.

use crate::block::BlockKind;
use crate::env::TurtleEnv;

/// Determines which [`BlockKind`] occupies the turtle's current position.
///
/// Probes [`BlockKind::PROBED`] in order and reports the first kind whose
/// membership test succeeds, without evaluating any further tests. If none of
/// the nine explicit probes match, [`BlockKind::FALLBACK`] is reported
/// unconditionally; the last kind is never itself probed.
///
/// The probe order is part of the external contract, not a tuning knob: it
/// fixes the cost of classifying each kind (air is one call, redstone is
/// free), and it resolves any overlap between predicates in favor of the
/// earlier kind. The protocol assumes the membership tests are mutually
/// exclusive and exhaustive over the enumeration.
///
/// # Known correctness gap
///
/// A block outside the enumeration fails all nine probes and is silently
/// reported as [`BlockKind::RedstoneBlock`]. The protocol offers no channel
/// to signal "unknown block", so this misclassification is unreported by
/// design and cannot be detected here.
pub fn classify<E: TurtleEnv + ?Sized>(env: &mut E) -> BlockKind {
    classify_with(|kind| env.matches(kind))
}

/// [`classify`], generalized over an arbitrary membership predicate.
///
/// `matches` must answer "is the block exactly this kind?" for a single fixed
/// position, and must be stable across repeated calls within one
/// classification.
pub fn classify_with(mut matches: impl FnMut(BlockKind) -> bool) -> BlockKind {
    for kind in BlockKind::PROBED {
        if matches(kind) {
            return kind;
        }
    }
    BlockKind::FALLBACK
}
