//! Neon Drift - bouncing neon shapes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall bounces, pointer
//!   avoidance, elastic collisions)
//! - `tuning`: Data-driven population parameters
//!
//! Rendering and the frame scheduler live outside this crate: a driver calls
//! [`sim::tick`] once per frame and reads body positions/kinds back out.

pub mod sim;
pub mod tuning;

pub use sim::{Body, ShapeKind, SpawnError, TickInput, World, tick};
pub use tuning::Tuning;

/// Simulation constants
pub mod consts {
    /// Extra reach of the pointer beyond a body's half-size, in pixels.
    /// A body closer than `size / 2 + POINTER_MARGIN` gets pushed away.
    pub const POINTER_MARGIN: f32 = 15.0;
    /// Speed (pixels per tick) a pointer-deflected body is sent away at
    pub const POINTER_PUSH_SPEED: f32 = 2.0;

    /// Mass is proportional to size
    pub const MASS_PER_SIZE: f32 = 0.5;

    /// Population defaults
    pub const DEFAULT_BODY_COUNT: usize = 20;
    pub const DEFAULT_MIN_SIZE: f32 = 30.0;
    pub const DEFAULT_MAX_SIZE: f32 = 50.0;
    pub const DEFAULT_MIN_SPEED: f32 = 0.5;
    pub const DEFAULT_MAX_SPEED: f32 = 1.2;
}
