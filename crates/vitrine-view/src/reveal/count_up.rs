use std::time::Duration;

use crate::scroll::easing::{EasingType, EasingTypeExt};
use crate::scroll::timing;

/// Statistic that counts up from zero once its section has been revealed
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    pub end: u64,
    pub suffix: String,
    pub duration: Duration,
    pub easing: EasingType,
}

impl CountUp {
    pub fn new(end: u64, suffix: impl Into<String>, duration: Duration) -> Self {
        Self {
            end,
            suffix: suffix.into(),
            duration,
            easing: EasingType::EaseOut,
        }
    }

    /// Counter value `elapsed` after the reveal
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let t = timing::progress(elapsed, Duration::ZERO, self.duration);
        if t >= 1.0 {
            return self.end;
        }
        (self.end as f64 * self.easing.apply(t)).round() as u64
    }

    /// Display text; before the reveal (`None`) the counter reads zero
    pub fn render(&self, since_reveal: Option<Duration>) -> String {
        let value = since_reveal.map_or(0, |elapsed| self.value_at(elapsed));
        format!("{}{}", group_thousands(value), self.suffix)
    }
}

/// Format with `,` between groups of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
