//! Page composition: content, scroll channels and reveals with one lifetime

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use vitrine_core::content::{
    ContentAggregator, ContentItem, ContentSource, HttpContentSource, MediaResolver,
};
use vitrine_core::{AppConfig, Result};

use crate::reveal::{
    AnimationVariant, ElementBounds, ElementId, RevealController, RevealEvent, RevealThreshold,
    RevealTransition, StaggerGroup, VisualState,
};
use crate::scroll::{ChannelSet, MotionConfigExt, ScrollFrame, SmoothedScroll};

/// The marketing pages and their depth layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Blog,
    Industries,
}

impl PageKind {
    /// Parallax travel per layer in px over the whole page, deepest first
    pub fn parallax_offsets(&self) -> &'static [f64] {
        match self {
            PageKind::Blog => &[-300.0, -150.0],
            PageKind::Industries => &[-300.0, -150.0, -75.0],
        }
    }

    /// Hero channels plus this page's parallax layers
    pub fn channels(&self) -> Result<ChannelSet> {
        ChannelSet::hero()?.with_parallax(self.parallax_offsets())
    }
}

/// Ends a page's lifetime from outside the page (e.g. on navigation)
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl TeardownHandle {
    pub fn teardown(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_torn_down(&self) -> bool {
        *self.tx.borrow()
    }
}

#[derive(Debug, Clone, Copy)]
struct Revealed {
    at: Duration,
    transition: RevealTransition,
}

/// One mounted page
///
/// Owns a single content aggregator, scroll tracker, channel set and reveal
/// controller. The page clock advances with every `tick`, and reveal
/// animations are sampled against it.
pub struct Page {
    kind: PageKind,
    content: ContentAggregator,
    media: MediaResolver,
    scroll: SmoothedScroll,
    channels: ChannelSet,
    reveals: RevealController,
    clock: Duration,
    revealed: BTreeMap<ElementId, Revealed>,
    teardown: TeardownHandle,
}

impl Page {
    pub fn new(kind: PageKind, config: &AppConfig, source: Arc<dyn ContentSource>) -> Result<Self> {
        let (tx, _rx) = watch::channel(false);
        Ok(Self {
            kind,
            content: ContentAggregator::new(
                source,
                config.source.collection.clone(),
                config.categories.clone(),
            ),
            media: MediaResolver::new(&config.source),
            scroll: SmoothedScroll::new(config.motion),
            channels: kind.channels()?,
            reveals: RevealController::new(config.reveal),
            clock: Duration::ZERO,
            revealed: BTreeMap::new(),
            teardown: TeardownHandle { tx: Arc::new(tx) },
        })
    }

    /// Page backed by the configured HTTP content source
    pub fn from_config(kind: PageKind, config: &AppConfig) -> Result<Self> {
        let source = Arc::new(HttpContentSource::new(&config.source)?);
        Self::new(kind, config, source)
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Load content for this page; abandoned if the page is torn down first
    pub async fn mount(&mut self) -> &[ContentItem] {
        let teardown = self.teardown.tx.subscribe();
        self.content.load_until(teardown).await
    }

    pub fn teardown_handle(&self) -> TeardownHandle {
        self.teardown.clone()
    }

    pub fn teardown(&self) {
        self.teardown.teardown();
    }

    pub fn content(&self) -> &ContentAggregator {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentAggregator {
        &mut self.content
    }

    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    pub fn reveals(&self) -> &RevealController {
        &self.reveals
    }

    /// Register an element with the configured reveal threshold
    pub fn register(&mut self, variant: AnimationVariant) -> ElementId {
        self.reveals.register(variant)
    }

    pub fn register_with(
        &mut self,
        variant: AnimationVariant,
        threshold: RevealThreshold,
    ) -> ElementId {
        self.reveals.register_with(variant, threshold)
    }

    /// Register a stagger group with the configured interval
    pub fn register_group<I>(&mut self, variants: I) -> StaggerGroup
    where
        I: IntoIterator<Item = AnimationVariant>,
    {
        self.reveals.register_group(variants)
    }

    pub fn register_group_with<I>(
        &mut self,
        variants: I,
        interval: Duration,
        threshold: RevealThreshold,
    ) -> StaggerGroup
    where
        I: IntoIterator<Item = AnimationVariant>,
    {
        self.reveals.register_group_with(variants, interval, threshold)
    }

    /// Time since mount, as advanced by ticks
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Advance one configured frame with the latest raw scroll fraction
    pub fn tick(&mut self, raw: f64) -> ScrollFrame {
        let dt = self.scroll.config().frame_duration();
        self.tick_with_dt(raw, dt)
    }

    /// Advance by `dt` with the latest raw scroll fraction
    pub fn tick_with_dt(&mut self, raw: f64, dt: Duration) -> ScrollFrame {
        self.clock = self.clock.saturating_add(dt);
        let smoothed = self.scroll.update_with_dt(raw, dt);
        self.channels.sample(smoothed)
    }

    /// Forward a visibility ratio to the reveal controller
    pub fn observe(&mut self, id: ElementId, ratio: f64) -> Option<RevealEvent> {
        let event = self.reveals.observe(id, ratio)?;
        Some(self.record(event))
    }

    pub fn observe_visible(&mut self, id: ElementId, visible: bool) -> Option<RevealEvent> {
        let event = self.reveals.observe_visible(id, visible)?;
        Some(self.record(event))
    }

    /// Feed one shared measurement (e.g. of the group's container) to every member
    pub fn observe_group(&mut self, group: &StaggerGroup, ratio: f64) -> Vec<RevealEvent> {
        let events = self.reveals.observe_group(group, ratio);
        events.into_iter().map(|event| self.record(event)).collect()
    }

    /// Forward element geometry to the reveal controller
    pub fn observe_bounds(
        &mut self,
        id: ElementId,
        bounds: ElementBounds,
        viewport_height: f64,
    ) -> Option<RevealEvent> {
        let event = self.reveals.observe_bounds(id, bounds, viewport_height)?;
        Some(self.record(event))
    }

    fn record(&mut self, event: RevealEvent) -> RevealEvent {
        self.revealed.insert(
            event.id,
            Revealed {
                at: self.clock,
                transition: event.transition(self.reveals.easing()),
            },
        );
        event
    }

    /// Time since `id` was revealed, or `None` while it is unrevealed
    pub fn since_reveal(&self, id: ElementId) -> Option<Duration> {
        self.revealed
            .get(&id)
            .map(|r| self.clock.saturating_sub(r.at))
    }

    /// Current animated state of an element
    pub fn visual_state(&self, id: ElementId) -> Option<VisualState> {
        if let Some(revealed) = self.revealed.get(&id) {
            return Some(revealed.transition.sample(self.clock.saturating_sub(revealed.at)));
        }
        self.reveals.variant(id).map(|v| v.initial)
    }

    /// Remove an element that left the render tree
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        self.revealed.remove(&id);
        self.reveals.unregister(id)
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{AnimationVariant, CountUp};
    use vitrine_core::content::ALL_CATEGORY;
    use vitrine_core::Error;

    struct FixtureSource;

    #[async_trait::async_trait]
    impl ContentSource for FixtureSource {
        async fn fetch(&self, collection: &str) -> Result<Vec<ContentItem>> {
            assert_eq!(collection, "blogs");
            let body = r#"[
                { "id": 1, "title": "Agents", "category": "AI", "posted_on": "2024-01-05" },
                { "id": 2, "title": "Chains", "category": "Web3", "posted_on": "2024-03-01",
                  "image": { "url": "/uploads/chains.png" } }
            ]"#;
            Ok(serde_json::from_str(body)?)
        }
    }

    struct NeverSource;

    #[async_trait::async_trait]
    impl ContentSource for NeverSource {
        async fn fetch(&self, _collection: &str) -> Result<Vec<ContentItem>> {
            std::future::pending::<()>().await;
            Err(Error::Other("unreachable".to_string()))
        }
    }

    fn page(kind: PageKind, source: Arc<dyn ContentSource>) -> Page {
        Page::new(kind, &AppConfig::default(), source).unwrap()
    }

    #[test]
    fn test_page_channel_presets() {
        let blog = PageKind::Blog.channels().unwrap();
        assert_eq!(blog.sample(1.0).parallax(), vec![-300.0, -150.0]);

        let industries = PageKind::Industries.channels().unwrap();
        assert_eq!(industries.sample(1.0).parallax(), vec![-300.0, -150.0, -75.0]);
    }

    #[tokio::test]
    async fn test_mount_loads_and_resolves_media() {
        let mut page = page(PageKind::Blog, Arc::new(FixtureSource));
        assert_eq!(page.mount().await.len(), 2);

        let featured = &page.content().featured()[0];
        assert_eq!(featured.id, 2);
        assert_eq!(
            page.media().resolve_image(featured.image.as_ref()),
            "http://localhost:1337/uploads/chains.png"
        );

        page.content_mut().set_category("AI");
        assert_eq!(page.content().filtered_view()[0].id, 1);
        page.content_mut().set_category(ALL_CATEGORY);
        assert_eq!(page.content().filtered_view().len(), 2);
    }

    #[tokio::test]
    async fn test_teardown_cancels_pending_mount() {
        let mut page = page(PageKind::Blog, Arc::new(NeverSource));
        let handle = page.teardown_handle();

        tokio::spawn(async move {
            tokio::task::yield_now().await;
            handle.teardown();
        });

        assert!(page.mount().await.is_empty());
        assert_eq!(
            page.content().state(),
            vitrine_core::content::LoadState::Cancelled
        );
    }

    #[test]
    fn test_tick_frames_share_one_snapshot() {
        let mut page = page(PageKind::Industries, Arc::new(FixtureSource));
        page.tick(0.0);

        let mut last_progress = 0.0;
        for _ in 0..30 {
            let frame = page.tick(1.0);
            let p = frame.progress;
            assert!(p >= last_progress);
            // Hero channels all derive from the same progress value
            let expected_scale = if p >= 0.2 { 1.5 } else { 1.0 + 2.5 * p };
            assert!((frame.scale().unwrap() - expected_scale).abs() < 1e-9);
            assert!((frame.parallax()[2] - (-75.0 * p)).abs() < 1e-9);
            last_progress = p;
        }
        assert!(page.clock() > Duration::from_millis(490));
    }

    #[test]
    fn test_reveal_animation_follows_clock() {
        let mut page = page(PageKind::Blog, Arc::new(FixtureSource));
        let id = page.register(AnimationVariant::fade_in_up(Duration::from_millis(600)));

        assert_eq!(page.visual_state(id).unwrap().opacity, 0.0);
        assert_eq!(page.since_reveal(id), None);

        page.tick_with_dt(0.0, Duration::from_millis(100));
        assert!(page.observe(id, 1.0).is_some());
        assert!(page.observe(id, 1.0).is_none());

        page.tick_with_dt(0.0, Duration::from_millis(300));
        let mid = page.visual_state(id).unwrap();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 50.0);

        page.tick_with_dt(0.0, Duration::from_secs(1));
        assert_eq!(page.visual_state(id).unwrap(), VisualState::REST);
    }

    #[test]
    fn test_stats_count_up_after_reveal() {
        let mut page = page(PageKind::Industries, Arc::new(FixtureSource));
        let stats = page.register(AnimationVariant::scale_in(Duration::from_millis(500)));
        let counter = CountUp::new(98, "%", Duration::from_millis(2500));

        assert_eq!(counter.render(page.since_reveal(stats)), "0%");

        assert!(page
            .observe_bounds(stats, ElementBounds::new(600.0, 900.0), 800.0)
            .is_some());
        page.tick_with_dt(0.0, Duration::from_secs(3));
        assert_eq!(counter.render(page.since_reveal(stats)), "98%");
    }

    #[test]
    fn test_remove_element() {
        let mut page = page(PageKind::Blog, Arc::new(FixtureSource));
        let id = page.register(AnimationVariant::fade_in(Duration::from_millis(300)));
        page.observe(id, 1.0);

        assert!(page.remove_element(id));
        assert_eq!(page.visual_state(id), None);
        assert_eq!(page.since_reveal(id), None);
    }

    #[test]
    fn test_group_reveal_animates_every_member() {
        const MS_600: Duration = Duration::from_millis(600);
        let mut page = page(PageKind::Industries, Arc::new(FixtureSource));
        let group = page.register_group(vec![AnimationVariant::fade_in_up(MS_600); 2]);

        page.tick_with_dt(0.0, Duration::from_millis(50));
        assert_eq!(page.observe_group(&group, 1.0).len(), 2);
        assert!(page.observe_group(&group, 1.0).is_empty());

        // Second member still waits out its stagger delay
        page.tick_with_dt(0.0, Duration::from_millis(50));
        assert_eq!(page.visual_state(group.members()[1]).unwrap().opacity, 0.0);
        assert!(page.visual_state(group.members()[0]).unwrap().opacity > 0.0);

        page.tick_with_dt(0.0, Duration::from_secs(5));
        for &id in group.members() {
            assert_eq!(page.since_reveal(id), Some(Duration::from_millis(5050)));
            assert_eq!(page.visual_state(id), Some(VisualState::REST));
        }
    }

    #[test]
    fn test_observe_visible_records_reveal() {
        let mut page = page(PageKind::Blog, Arc::new(FixtureSource));
        let id = page.register(AnimationVariant::rise(Duration::from_millis(400)));

        assert!(page.observe_visible(id, false).is_none());
        assert!(page.observe_visible(id, true).is_some());
        page.tick_with_dt(0.0, Duration::from_secs(1));
        assert_eq!(page.visual_state(id), Some(VisualState::REST));
    }

    #[test]
    fn test_clock_saturates() {
        let mut page = page(PageKind::Blog, Arc::new(FixtureSource));
        page.tick_with_dt(0.0, Duration::MAX);
        page.tick_with_dt(0.0, Duration::MAX);
        assert_eq!(page.clock(), Duration::MAX);
    }
}
