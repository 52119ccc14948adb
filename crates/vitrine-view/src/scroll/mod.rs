//! Scroll-driven transforms for Vitrine pages
//!
//! A raw scroll fraction is smoothed by a damped spring, and the smoothed
//! value feeds a set of piecewise-linear channels (hero scale/opacity/blur,
//! parallax layers, progress bar).
//!
//! # Layers
//!
//! ## Atomic
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Spring configuration helpers (re-exported from vitrine-core)
//! - `transform` - Breakpoint tables and their evaluation
//!
//! ## Molecular
//! - `spring` - Smoothed scroll tracker
//! - `channels` - Named channel sets evaluated against one snapshot
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_view::scroll::{ChannelSet, SmoothedScroll};
//!
//! let mut tracker = SmoothedScroll::with_defaults();
//! let channels = ChannelSet::hero()?.with_parallax(&[-300.0, -150.0])?;
//!
//! // Once per animation frame
//! let smoothed = tracker.update(raw_scroll_fraction);
//! let frame = channels.sample(smoothed);
//! let opacity = frame.get("opacity");
//! ```

// Atomic
pub mod config;
pub mod easing;
pub mod timing;
pub mod transform;

// Molecular
pub mod channels;
pub mod spring;

pub use channels::{ChannelSet, ScrollFrame};
pub use config::{MotionConfig, MotionConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use spring::SmoothedScroll;
pub use transform::{Breakpoint, TransformChannel};
