use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use tracing::debug;
use vitrine_core::{EasingType, RevealConfig};

use super::intersection::{ElementBounds, RevealThreshold};
use super::stagger::StaggerGroup;
use super::variant::{AnimationVariant, RevealTransition};

/// Identity of a registered element; never reused within a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reveal lifecycle; `Revealed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

/// Emitted exactly once per element, when it is revealed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealEvent {
    pub id: ElementId,
    /// Animation to play; `delay` already includes any stagger offset
    pub variant: AnimationVariant,
}

impl RevealEvent {
    pub fn transition(&self, easing: EasingType) -> RevealTransition {
        RevealTransition::new(self.variant, easing)
    }
}

#[derive(Debug, Clone)]
struct Element {
    threshold: RevealThreshold,
    variant: AnimationVariant,
    state: RevealState,
}

/// Owns the reveal state of every element on a page, keyed by element id
#[derive(Debug, Clone)]
pub struct RevealController {
    config: RevealConfig,
    elements: BTreeMap<ElementId, Element>,
    next_id: u64,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            elements: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn easing(&self) -> EasingType {
        self.config.easing
    }

    /// Default entrance duration from configuration
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.config.duration_ms)
    }

    /// Register an element with the configured threshold
    pub fn register(&mut self, variant: AnimationVariant) -> ElementId {
        let threshold = RevealThreshold::from(&self.config);
        self.register_with(variant, threshold)
    }

    /// Register an element with its own threshold
    pub fn register_with(
        &mut self,
        variant: AnimationVariant,
        threshold: RevealThreshold,
    ) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            Element {
                threshold,
                variant,
                state: RevealState::Unrevealed,
            },
        );
        id
    }

    /// Register a stagger group using the configured interval
    pub fn register_group<I>(&mut self, variants: I) -> StaggerGroup
    where
        I: IntoIterator<Item = AnimationVariant>,
    {
        let interval = Duration::from_millis(self.config.stagger_ms);
        self.register_group_with(variants, interval, RevealThreshold::from(&self.config))
    }

    /// Register a stagger group; member `i` gets `i × interval` extra delay
    pub fn register_group_with<I>(
        &mut self,
        variants: I,
        interval: Duration,
        threshold: RevealThreshold,
    ) -> StaggerGroup
    where
        I: IntoIterator<Item = AnimationVariant>,
    {
        let members = variants
            .into_iter()
            .enumerate()
            .map(|(index, variant)| {
                let delay = variant
                    .delay
                    .saturating_add(StaggerGroup::delay_for(interval, index));
                self.register_with(variant.delay(delay), threshold)
            })
            .collect();
        StaggerGroup::new(members, interval)
    }

    /// Forget an element that left the render tree
    pub fn unregister(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }

    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.elements.get(&id).map(|e| e.state)
    }

    pub fn variant(&self, id: ElementId) -> Option<&AnimationVariant> {
        self.elements.get(&id).map(|e| &e.variant)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.elements
            .values()
            .filter(|e| e.state == RevealState::Revealed)
            .count()
    }

    /// Feed a visibility measurement for `id`
    ///
    /// Returns the entrance event the first time the ratio crosses the
    /// element's threshold; `None` otherwise, including for unknown ids and
    /// elements that are already revealed.
    pub fn observe(&mut self, id: ElementId, ratio: f64) -> Option<RevealEvent> {
        let element = self.elements.get_mut(&id)?;

        if element.state == RevealState::Revealed || !element.threshold.is_crossed(ratio) {
            return None;
        }

        element.state = RevealState::Revealed;
        debug!(
            "Revealed element {} (ratio {:.2}, delay {}ms)",
            id,
            ratio,
            element.variant.delay.as_millis()
        );

        Some(RevealEvent {
            id,
            variant: element.variant,
        })
    }

    /// Feed a plain visible/hidden notification
    pub fn observe_visible(&mut self, id: ElementId, visible: bool) -> Option<RevealEvent> {
        self.observe(id, if visible { 1.0 } else { 0.0 })
    }

    /// Feed element geometry; the ratio is measured against the viewport
    /// shrunk by the element's own margin
    pub fn observe_bounds(
        &mut self,
        id: ElementId,
        bounds: ElementBounds,
        viewport_height: f64,
    ) -> Option<RevealEvent> {
        let margin_px = self.elements.get(&id)?.threshold.margin_px;
        let ratio = bounds.intersection_ratio(viewport_height, margin_px);
        self.observe(id, ratio)
    }

    /// Feed one shared measurement (e.g. of the group's container) to every member
    pub fn observe_group(&mut self, group: &StaggerGroup, ratio: f64) -> Vec<RevealEvent> {
        group
            .members()
            .iter()
            .filter_map(|&id| self.observe(id, ratio))
            .collect()
    }
}
