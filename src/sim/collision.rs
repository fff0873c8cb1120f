//! Pairwise elastic collision resolution
//!
//! Bodies collide as circles: the overlap test uses the average of the two
//! sizes as the contact distance. Response is a 1D elastic impulse projected
//! onto the contact normal (restitution 1, momentum-conserving along the
//! normal) plus an even positional split of the penetration.

use glam::Vec2;

use super::state::Body;

/// Resolve one unordered pair of bodies
///
/// No effect unless the circles overlap. An overlapping pair that is already
/// separating along the normal is left completely untouched, penetration
/// included; it drifts apart on its own. Matching long-standing behavior, do
/// not add an unconditional separation here.
pub fn resolve_pair(a: &mut Body, b: &mut Body) {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = (a.size + b.size) / 2.0;

    if distance >= min_distance {
        return;
    }

    let normal = contact_normal(delta);
    let closing_speed = (a.vel - b.vel).dot(normal);

    // Already moving apart
    if closing_speed < 0.0 {
        return;
    }

    // Elastic impulse along the normal: momentum is conserved exactly,
    // relative normal velocity is reflected
    let impulse = 2.0 * closing_speed / (a.mass + b.mass);
    a.vel -= normal * impulse * b.mass;
    b.vel += normal * impulse * a.mass;

    // Separate the overlap evenly (not mass-weighted, by convention)
    let overlap = (min_distance - distance) / 2.0;
    a.pos -= normal * overlap;
    b.pos += normal * overlap;
}

/// Unit normal from `a` toward `b`, with a fixed fallback axis when the
/// centers coincide so the resolver never emits NaN
#[inline]
fn contact_normal(delta: Vec2) -> Vec2 {
    let normal = delta.normalize_or_zero();
    if normal == Vec2::ZERO { Vec2::X } else { normal }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ShapeKind;
    use proptest::prelude::*;

    fn body(pos: Vec2, vel: Vec2, size: f32) -> Body {
        let mut world = crate::sim::state::World::new(10_000.0, 10_000.0);
        world.spawn(pos, vel, size, ShapeKind::Circle).unwrap();
        world.bodies.pop().unwrap()
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        // Distance 15 < contact distance 20, closing speed 2
        let mut a = body(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 20.0);
        let mut b = body(Vec2::new(115.0, 100.0), Vec2::new(-1.0, 0.0), 20.0);

        resolve_pair(&mut a, &mut b);

        assert!((a.vel.x - (-1.0)).abs() < 1e-5);
        assert!((b.vel.x - 1.0).abs() < 1e-5);
        assert!(a.vel.y.abs() < 1e-5 && b.vel.y.abs() < 1e-5);

        // Overlap of 5 split evenly along the normal
        assert!((a.pos.x - 97.5).abs() < 1e-4);
        assert!((b.pos.x - 117.5).abs() < 1e-4);
        assert!((a.pos.distance(b.pos) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_overlapping_pair_untouched() {
        let mut a = body(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), 20.0);
        let mut b = body(Vec2::new(25.0, 0.0), Vec2::new(-5.0, 0.0), 20.0);

        resolve_pair(&mut a, &mut b);

        assert_eq!(a.vel, Vec2::new(5.0, 0.0));
        assert_eq!(b.vel, Vec2::new(-5.0, 0.0));
        assert_eq!(a.pos, Vec2::new(0.0, 0.0));
        assert_eq!(b.pos, Vec2::new(25.0, 0.0));
    }

    #[test]
    fn test_separating_overlap_is_skipped() {
        // Overlapping but flying apart: closing speed is negative, so the
        // pair keeps its velocities AND its penetration
        let mut a = body(Vec2::new(0.0, 0.0), Vec2::new(-2.0, 0.0), 20.0);
        let mut b = body(Vec2::new(10.0, 0.0), Vec2::new(2.0, 0.0), 20.0);

        resolve_pair(&mut a, &mut b);

        assert_eq!(a.vel, Vec2::new(-2.0, 0.0));
        assert_eq!(b.vel, Vec2::new(2.0, 0.0));
        assert_eq!(a.pos.distance(b.pos), 10.0);
    }

    #[test]
    fn test_coincident_centers_use_fallback_normal() {
        let mut a = body(Vec2::new(50.0, 50.0), Vec2::ZERO, 20.0);
        let mut b = body(Vec2::new(50.0, 50.0), Vec2::ZERO, 20.0);

        resolve_pair(&mut a, &mut b);

        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.vel.is_finite() && b.vel.is_finite());
        // Separated along the +X fallback to exactly the contact distance
        assert!((a.pos.distance(b.pos) - 20.0).abs() < 1e-4);
        assert!(b.pos.x > a.pos.x);
    }

    #[test]
    fn test_unequal_masses_conserve_momentum() {
        let mut a = body(Vec2::new(0.0, 0.0), Vec2::new(3.0, 1.0), 40.0); // mass 20
        let mut b = body(Vec2::new(20.0, 5.0), Vec2::new(-1.0, 0.5), 20.0); // mass 10

        let before = a.vel * a.mass + b.vel * b.mass;
        resolve_pair(&mut a, &mut b);
        let after = a.vel * a.mass + b.vel * b.mass;

        assert!((before - after).length() < 1e-3);
    }

    proptest! {
        /// Total momentum is preserved on every branch of the resolver
        #[test]
        fn prop_resolve_conserves_momentum(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            avx in -10.0f32..10.0, avy in -10.0f32..10.0,
            bvx in -10.0f32..10.0, bvy in -10.0f32..10.0,
            asize in 1.0f32..100.0, bsize in 1.0f32..100.0,
        ) {
            let mut a = body(Vec2::new(ax, ay), Vec2::new(avx, avy), asize);
            let mut b = body(Vec2::new(bx, by), Vec2::new(bvx, bvy), bsize);

            let before = a.vel * a.mass + b.vel * b.mass;
            resolve_pair(&mut a, &mut b);
            let after = a.vel * a.mass + b.vel * b.mass;

            prop_assert!((before - after).length() < 1e-2);
            prop_assert!(a.pos.is_finite() && b.pos.is_finite());
            prop_assert!(a.vel.is_finite() && b.vel.is_finite());
        }

        /// When the impulse branch fires, the pair ends exactly at contact
        /// distance (in isolation)
        #[test]
        fn prop_impulse_branch_resolves_to_contact_distance(
            offset_x in -30.0f32..30.0, offset_y in -30.0f32..30.0,
            asize in 10.0f32..50.0, bsize in 10.0f32..50.0,
            speed in 0.0f32..10.0,
        ) {
            let a_pos = Vec2::new(100.0, 100.0);
            let b_pos = a_pos + Vec2::new(offset_x, offset_y);
            let min_distance = (asize + bsize) / 2.0;
            prop_assume!(a_pos.distance(b_pos) < min_distance);

            // Drive them together so the closing speed is non-negative
            let toward = (b_pos - a_pos).normalize_or_zero();
            let mut a = body(a_pos, toward * speed, asize);
            let mut b = body(b_pos, -toward * speed, bsize);

            resolve_pair(&mut a, &mut b);

            prop_assert!((a.pos.distance(b.pos) - min_distance).abs() < 1e-3);
        }
    }
}
