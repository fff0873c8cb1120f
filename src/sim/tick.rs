//! Per-frame simulation tick
//!
//! Ordering is a contract, not an accident: each body is integrated, wall
//! reflected, then pointer deflected, and only after every body has moved does
//! the pairwise collision pass run. Collision response therefore sees
//! post-movement positions. Reordering these phases changes simulation
//! outcomes.

use glam::Vec2;

use super::collision::resolve_pair;
use super::state::World;

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Tracked pointer position in viewport coordinates, if any
    pub pointer: Option<Vec2>,
}

impl TickInput {
    pub fn with_pointer(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(Vec2::new(x, y)),
        }
    }
}

/// Advance the world by one tick
///
/// Phase 1 touches every body independently: integrate, reflect off the
/// viewport walls, deflect away from the pointer. Phase 2 resolves every
/// unordered pair `(i, j)` with `i < j` exactly once, in ascending index
/// order. A single pass can leave residual overlap when three or more bodies
/// touch at once; the next tick picks it up.
pub fn tick(world: &mut World, input: &TickInput) {
    let (width, height) = (world.width, world.height);

    for body in &mut world.bodies {
        body.integrate();
        body.reflect_walls(width, height);
        if let Some(pointer) = input.pointer {
            body.deflect_from(pointer);
        }
    }

    for i in 0..world.bodies.len() {
        let (head, tail) = world.bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_pair(a, b);
        }
    }
}
