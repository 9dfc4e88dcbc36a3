//! Collision queries between the rocket and the other entities
//!
//! The rocket sprite is a narrow shape inside a square image, so its box is
//! shrunk to half size around its center for the check. The other party keeps
//! its full box. The shrunk box exists only for the duration of the query.

use super::entity::{Entity, Rect};

/// True if the shrunk `probe` box overlaps `target`
#[inline]
pub fn shrunk_overlap(probe: &Rect, target: &Rect) -> bool {
    probe.shrunk().overlaps(target)
}

/// True if `probe` hits any live entity in `others` (linear scan)
pub fn hits_any<'a, E, I>(probe: &Rect, others: I) -> bool
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let small = probe.shrunk();
    others
        .into_iter()
        .filter(|e| e.is_alive())
        .any(|e| small.overlaps(&e.rect()))
}
