use vitrine_core::RevealConfig;

/// Vertical extent of an element, in px relative to the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Fraction of the element inside the viewport after shrinking it by
    /// `margin_px` on both edges
    pub fn intersection_ratio(&self, viewport_height: f64, margin_px: f64) -> f64 {
        let root_top = margin_px;
        let root_bottom = viewport_height - margin_px;
        if root_bottom <= root_top {
            return 0.0;
        }

        let height = self.bottom - self.top;
        if height <= 0.0 {
            // Zero-height element: visible iff its position is inside the root
            return if (root_top..=root_bottom).contains(&self.top) {
                1.0
            } else {
                0.0
            };
        }

        let overlap = self.bottom.min(root_bottom) - self.top.max(root_top);
        (overlap.max(0.0) / height).clamp(0.0, 1.0)
    }
}

/// When an element counts as visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold {
    /// Viewport shrink applied before measuring, in px
    pub margin_px: f64,
    /// Ratio that must be reached (0 = any overlap at all)
    pub amount: f64,
}

impl Default for RevealThreshold {
    fn default() -> Self {
        Self {
            margin_px: 0.0,
            amount: 0.0,
        }
    }
}

impl From<&RevealConfig> for RevealThreshold {
    fn from(config: &RevealConfig) -> Self {
        Self {
            margin_px: config.margin_px,
            amount: config.amount,
        }
    }
}

impl RevealThreshold {
    pub fn with_margin(margin_px: f64) -> Self {
        Self {
            margin_px,
            ..Default::default()
        }
    }

    /// Check whether an intersection ratio crosses this threshold
    #[inline]
    pub fn is_crossed(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.amount
    }
}
