//! One-shot viewport reveals
//!
//! Each registered element starts `Unrevealed` and flips to `Revealed` the
//! first time its visible intersection crosses its threshold. The flip emits
//! the element's entrance animation once; later visibility changes are
//! ignored.

pub mod controller;
pub mod count_up;
pub mod intersection;
pub mod stagger;
pub mod variant;

pub use controller::{ElementId, RevealController, RevealEvent, RevealState};
pub use count_up::CountUp;
pub use intersection::{ElementBounds, RevealThreshold};
pub use stagger::StaggerGroup;
pub use variant::{AnimationVariant, RevealTransition, VisualState};
