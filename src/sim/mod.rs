//! Deterministic simulation module
//!
//! All widget behavior lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order for geese, placement order for food)
//! - No rendering or platform dependencies (hit-testing is injected)

pub mod color;
pub mod cursor;
pub mod goose;
pub mod redirect;
pub mod target;

pub use color::{FoodKind, Hcl, MAX_CHROMA, starting_colors};
pub use cursor::{CursorSim, Viewport};
pub use goose::{DropPayload, FoodOnGround, Goose, Pen};
#[cfg(target_arch = "wasm32")]
pub use redirect::DomHitTest;
pub use redirect::{HitTest, Redirector, SyntheticEvent};
pub use target::{NormalizationMode, NumberEntry, RingHit, TargetSim};
