//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - One tick per external frame signal, velocities in pixels/tick
//! - Seeded RNG only (and only at population time)
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::resolve_pair;
pub use state::{Body, ShapeKind, SpawnError, World};
pub use tick::{TickInput, tick};
