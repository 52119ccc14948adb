//! Molecular: named channel sets and per-frame snapshots

use vitrine_core::{Error, Result};

use super::transform::TransformChannel;

pub const SCALE: &str = "scale";
pub const OPACITY: &str = "opacity";
pub const BLUR_PX: &str = "blurPx";
pub const PROGRESS: &str = "progress";

/// Name of the parallax channel for depth layer `index` (0 = deepest)
pub fn parallax_name(index: usize) -> String {
    format!("parallaxOffset[{}]", index)
}

/// Every channel value for one smoothed scroll value
///
/// Values are computed together from a single snapshot, so all effects
/// applied in one frame agree with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub progress: f64,
    values: Vec<(String, f64)>,
}

impl ScrollFrame {
    /// Value of the named channel, if the set defines it
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn values(&self) -> &[(String, f64)] {
        &self.values
    }

    pub fn scale(&self) -> Option<f64> {
        self.get(SCALE)
    }

    pub fn opacity(&self) -> Option<f64> {
        self.get(OPACITY)
    }

    pub fn blur_px(&self) -> Option<f64> {
        self.get(BLUR_PX)
    }

    /// Parallax offsets, deepest layer first
    pub fn parallax(&self) -> Vec<f64> {
        (0..)
            .map(parallax_name)
            .map_while(|name| self.get(&name))
            .collect()
    }
}

/// An ordered set of uniquely named channels
#[derive(Debug, Clone, Default)]
pub struct ChannelSet {
    channels: Vec<TransformChannel>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel; names must be unique within a set
    pub fn with(mut self, channel: TransformChannel) -> Result<Self> {
        if self.channels.iter().any(|c| c.name() == channel.name()) {
            return Err(Error::InvalidChannel(format!(
                "duplicate channel '{}'",
                channel.name()
            )));
        }
        self.channels.push(channel);
        Ok(self)
    }

    /// Hero collapse over the first fifth of the page: scale 1→1.5,
    /// opacity 1→0, blur 0→10px, plus the progress bar
    pub fn hero() -> Result<Self> {
        Self::new()
            .with(TransformChannel::linear(PROGRESS, (0.0, 1.0), (0.0, 1.0))?)?
            .with(TransformChannel::linear(SCALE, (0.0, 0.2), (1.0, 1.5))?)?
            .with(TransformChannel::linear(OPACITY, (0.0, 0.2), (1.0, 0.0))?)?
            .with(TransformChannel::linear(BLUR_PX, (0.0, 0.2), (0.0, 10.0))?)
    }

    /// Add one parallax layer per offset, each moving linearly from 0 to its
    /// offset (in px) over the whole page; smaller magnitudes read as closer
    pub fn with_parallax(mut self, offsets: &[f64]) -> Result<Self> {
        for (index, &offset) in offsets.iter().enumerate() {
            self = self.with(TransformChannel::linear(
                parallax_name(index),
                (0.0, 1.0),
                (0.0, offset),
            )?)?;
        }
        Ok(self)
    }

    pub fn channels(&self) -> &[TransformChannel] {
        &self.channels
    }

    pub fn get(&self, name: &str) -> Option<&TransformChannel> {
        self.channels.iter().find(|c| c.name() == name)
    }

    /// Evaluate every channel against the same smoothed value
    pub fn sample(&self, progress: f64) -> ScrollFrame {
        ScrollFrame {
            progress,
            values: self
                .channels
                .iter()
                .map(|c| (c.name().to_string(), c.evaluate(progress)))
                .collect(),
        }
    }
}
