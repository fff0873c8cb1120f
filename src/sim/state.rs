//! World state and core simulation types
//!
//! A [`World`] owns the body collection and the viewport extent. Bodies are
//! created once at population time and keep their identity for the whole run.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Shape variants a body can render as
///
/// The simulation never draws; the kind only selects glyph and color in the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Triangle,
    Circle,
    Square,
    Cross,
}

/// All shape kinds, in spawn-weight order
pub const ALL_KINDS: [ShapeKind; 4] = [
    ShapeKind::Triangle,
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Cross,
];

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Cross => "cross",
        }
    }

    /// Neon color for this kind as RGB
    pub fn color(&self) -> [u8; 3] {
        match self {
            ShapeKind::Triangle => [0, 255, 0],  // green
            ShapeKind::Circle => [255, 0, 0],    // red
            ShapeKind::Square => [255, 0, 255],  // magenta
            ShapeKind::Cross => [0, 0, 255],     // blue
        }
    }
}

/// Rejected body construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnError {
    /// Size must be positive and finite; mass and the collision radius
    /// derive from it
    InvalidSize(f32),
}

impl std::fmt::Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::InvalidSize(size) => {
                write!(f, "body size must be positive and finite, got {size}")
            }
        }
    }
}

impl std::error::Error for SpawnError {}

/// A body entity
///
/// Positions are viewport coordinates, velocities are pixels per tick.
/// `size` doubles as the visual extent and the collision diameter; `mass`
/// is derived from it at construction and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub mass: f32,
    pub kind: ShapeKind,
}

impl Body {
    fn new(id: u32, pos: Vec2, vel: Vec2, size: f32, kind: ShapeKind) -> Self {
        Self {
            id,
            pos,
            vel,
            size,
            mass: size * MASS_PER_SIZE,
            kind,
        }
    }

    /// Half the body extent; the collision radius and the wall margin
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    /// Advance position by one tick of velocity
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Clamp the body inside the viewport, reflecting velocity on contact
    ///
    /// Each axis is handled independently, so a corner hit reflects both.
    /// This is clamp-then-reflect, not a time-accurate wall collision: a very
    /// fast body loses the distance it overshot. Accepted approximation.
    pub fn reflect_walls(&mut self, width: f32, height: f32) {
        let half = self.half_size();

        if self.pos.x < half {
            self.pos.x = half;
            self.vel.x = -self.vel.x;
        } else if self.pos.x > width - half {
            self.pos.x = width - half;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y < half {
            self.pos.y = half;
            self.vel.y = -self.vel.y;
        } else if self.pos.y > height - half {
            self.pos.y = height - half;
            self.vel.y = -self.vel.y;
        }
    }

    /// Push the body away from a nearby pointer
    ///
    /// Inside the proximity margin the velocity is *overwritten* with a
    /// fixed-speed vector pointing from the pointer toward the body. Not
    /// momentum-conserving; the point is a strong, immediate flee response.
    /// No effect outside the margin.
    pub fn deflect_from(&mut self, pointer: Vec2) {
        let dist = self.pos.distance(pointer);
        if dist < self.half_size() + POINTER_MARGIN {
            let away = self.pos - pointer;
            // atan2(0, 0) is 0, so coincident pointer/body pushes along +X
            let angle = away.y.atan2(away.x);
            self.vel = Vec2::new(angle.cos(), angle.sin()) * POINTER_PUSH_SPEED;
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Viewport extent in pixels
    pub width: f32,
    pub height: f32,
    /// Bodies in insertion order; the pairwise pass relies on this order
    /// being stable
    pub bodies: Vec<Body>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create an empty world for the given viewport
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a body and return its ID
    ///
    /// Mass is derived internally from `size`. Fails only on a non-positive
    /// or non-finite size; the world is unchanged on failure.
    pub fn spawn(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        size: f32,
        kind: ShapeKind,
    ) -> Result<u32, SpawnError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(SpawnError::InvalidSize(size));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.bodies.push(Body::new(id, pos, vel, size, kind));
        Ok(id)
    }

    /// Populate the world with randomly placed bodies
    ///
    /// Positions are uniform over the whole viewport (a body spawned hugging
    /// an edge gets pulled in by wall reflection on the first tick, same as
    /// the screensaver this is modeled on). Velocity is a random direction
    /// scaled by a uniform speed draw.
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) -> Result<(), SpawnError> {
        for _ in 0..tuning.body_count {
            let pos = Vec2::new(
                rng.random_range(0.0..=self.width),
                rng.random_range(0.0..=self.height),
            );
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(tuning.min_speed..=tuning.max_speed);
            let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
            let size = rng.random_range(tuning.min_size..=tuning.max_size);
            let kind = ALL_KINDS[rng.random_range(0..ALL_KINDS.len())];

            self.spawn(pos, vel, size, kind)?;
        }

        log::info!(
            "scattered {} bodies across {}x{}",
            tuning.body_count,
            self.width,
            self.height
        );
        Ok(())
    }

    /// Update the viewport extent
    ///
    /// Existing bodies are not repositioned; one that now sits outside the
    /// new bounds gets reflected back in on a later tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Bodies in insertion order, for the renderer
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}
