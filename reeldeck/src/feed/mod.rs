//! # Feed State Synchronizer
//!
//! The one authoritative, locally-cached view of the reels feed, kept
//! consistent with the catalog server through confirm-then-patch updates.
//!
//! The synchronizer owns a [`FeedState`] cell and is its only writer. Every
//! mutation goes to the server first; the matching feed item is patched in
//! place only after the call is confirmed, so counters the server may also
//! change independently (concurrent increments from another client) never
//! split-brain. The "optimistic" feel comes from confirmation round-trips
//! being fast, not from pre-confirmation mutation.
//!
//! A superseded `load()` is detected by generation-tag comparison and its
//! response dropped; the transport itself is not aborted.
//!
//! Failures never escape to callers as errors: every operation returns a
//! boolean or optional result and logs the operation name and target id.
//!
//! Playback telemetry for the feed lives in [`session::SessionTracker`]; the
//! synchronizer drives it through the `note_*` methods and issues the server
//! effects its transitions ask for.

pub mod session;

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use shared::{SceneItem, TagItem};

use crate::core::service::CatalogService;
use crate::services::api::scenes::FeedOrder;
use crate::services::api::tags::TagCreateError;
use crate::utils::validation::validate_rating;
use session::SessionTracker;

/// Tri-state of the feed list.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    /// Kind-tagged message, surfaced with a retry affordance.
    Error(String),
    /// Server-ordered items, exactly one per id, stable for this load.
    Loaded(Vec<SceneItem>),
}

/// Owns the in-memory feed list, applies confirmed patches, and scopes the
/// per-item playback session records.
pub struct FeedSynchronizer {
    gateway: Arc<dyn CatalogService>,
    state: RwLock<FeedState>,
    sessions: SessionTracker,
    /// Tag of the most recently issued load; stale responses compare unequal.
    generation: AtomicU64,
    order: FeedOrder,
    page_size: usize,
}

impl FeedSynchronizer {
    pub fn new(gateway: Arc<dyn CatalogService>, order: FeedOrder, page_size: usize) -> Self {
        Self {
            gateway,
            state: RwLock::new(FeedState::Loading),
            sessions: SessionTracker::new(),
            generation: AtomicU64::new(0),
            order,
            page_size,
        }
    }

    /// Snapshot of the current feed state for rendering.
    pub fn state(&self) -> FeedState {
        self.state.read().clone()
    }

    /// Clone of a single loaded item, if present.
    pub fn item(&self, id: &str) -> Option<SceneItem> {
        match &*self.state.read() {
            FeedState::Loaded(items) => items.iter().find(|s| s.id == id).cloned(),
            _ => None,
        }
    }

    /// Fetch the feed. A newer `load()` supersedes this one: whichever call
    /// was issued last wins, and earlier responses are discarded.
    pub async fn load(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write() = FeedState::Loading;

        let result = self.gateway.find_scenes(self.order, self.page_size).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding stale feed response");
            return;
        }

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "Feed loaded");
                *self.state.write() = FeedState::Loaded(items);
            }
            Err(message) => {
                tracing::warn!(error = %message, "Feed load failed");
                *self.state.write() = FeedState::Error(message);
            }
        }
    }

    /// Reload the feed, first flushing and discarding every live playback
    /// session record. The accumulated watch time was real, so pending
    /// appends are sent before the records are dropped.
    pub async fn refresh(&self) {
        for (id, seconds) in self.sessions.drain() {
            if let Err(e) = self.gateway.save_play_duration(&id, seconds).await {
                tracing::warn!(operation = "save_play_duration", scene_id = %id, error = %e, "Pre-refresh flush failed");
            }
        }
        self.load().await;
    }

    /// Set an item's rating (0-100). Patches the local item only after the
    /// server confirms; no other field is touched.
    pub async fn mutate_rating(&self, id: &str, rating100: i64) -> bool {
        if let Some(reason) = validate_rating(rating100).error {
            tracing::warn!(operation = "mutate_rating", scene_id = %id, rating100, reason = %reason, "Rejected rating");
            return false;
        }

        match self.gateway.set_scene_rating(id, rating100).await {
            Ok(()) => self.patch_item(id, "mutate_rating", |item| {
                item.rating100 = Some(rating100);
            }),
            Err(e) => {
                tracing::warn!(operation = "mutate_rating", scene_id = %id, error = %e, "Mutation failed");
                false
            }
        }
    }

    /// Increment an item's O-count. The local item is patched to the
    /// server-returned authoritative value, never locally incremented, so
    /// concurrent increments from elsewhere cannot drift the display.
    pub async fn increment_o_count(&self, id: &str) -> Option<i64> {
        match self.gateway.increment_o_count(id).await {
            Ok(count) => {
                self.patch_item(id, "increment_o_count", |item| item.o_count = count);
                Some(count)
            }
            Err(e) => {
                tracing::warn!(operation = "increment_o_count", scene_id = %id, error = %e, "Mutation failed");
                None
            }
        }
    }

    /// Reset an item's O-count, patching to the server-confirmed value.
    pub async fn reset_o_count(&self, id: &str) -> Option<i64> {
        match self.gateway.reset_o_count(id).await {
            Ok(count) => {
                self.patch_item(id, "reset_o_count", |item| item.o_count = count);
                Some(count)
            }
            Err(e) => {
                tracing::warn!(operation = "reset_o_count", scene_id = %id, error = %e, "Mutation failed");
                None
            }
        }
    }

    /// Attach `tag` to an item. The full resulting tag-id set is sent
    /// (replace semantics, idempotent for a given target set); local tags
    /// change only on confirmed success.
    pub async fn add_tag(&self, id: &str, tag: TagItem) -> bool {
        let Some(current) = self.item(id).map(|item| item.tags) else {
            tracing::warn!(operation = "add_tag", scene_id = %id, "Item not in loaded feed");
            return false;
        };

        let mut target = current;
        if !target.iter().any(|t| t.id == tag.id) {
            target.push(tag);
        }
        self.replace_tags(id, "add_tag", target).await
    }

    /// Detach `tag` from an item, by tag id, with the same replace semantics
    /// as [`add_tag`](Self::add_tag).
    pub async fn remove_tag(&self, id: &str, tag: &TagItem) -> bool {
        let Some(current) = self.item(id).map(|item| item.tags) else {
            tracing::warn!(operation = "remove_tag", scene_id = %id, "Item not in loaded feed");
            return false;
        };

        let target: Vec<TagItem> = current.into_iter().filter(|t| t.id != tag.id).collect();
        self.replace_tags(id, "remove_tag", target).await
    }

    /// Create a tag by name and attach it. If creation fails because the tag
    /// already exists, fall back to a case-insensitive exact-match lookup in
    /// the full catalog and attach the found tag instead.
    pub async fn create_tag_and_attach(&self, id: &str, name: &str) -> bool {
        let tag = match self.gateway.create_tag(name).await {
            Ok(tag) => tag,
            Err(TagCreateError::Conflict) => {
                let found = match self.gateway.all_tags().await {
                    Ok(tags) => tags
                        .into_iter()
                        .find(|t| t.name.eq_ignore_ascii_case(name)),
                    Err(e) => {
                        tracing::warn!(operation = "create_tag_and_attach", scene_id = %id, error = %e, "Catalog lookup failed");
                        return false;
                    }
                };
                match found {
                    Some(tag) => tag,
                    None => {
                        tracing::warn!(operation = "create_tag_and_attach", scene_id = %id, tag_name = %name, "Conflicting tag not found in catalog");
                        return false;
                    }
                }
            }
            Err(TagCreateError::Other(e)) => {
                tracing::warn!(operation = "create_tag_and_attach", scene_id = %id, error = %e, "Tag creation failed");
                return false;
            }
        };

        self.add_tag(id, tag).await
    }

    /// Item became the active reel. Issues the play-count increment at most
    /// once per item per load cycle and patches the local count to the
    /// server-returned value.
    pub async fn note_activated(&self, id: &str) {
        if !self.sessions.begin(id) {
            return;
        }
        match self.gateway.increment_play_count(id).await {
            Ok(count) => {
                self.patch_item(id, "note_activated", |item| item.play_count = count);
            }
            Err(e) => {
                tracing::warn!(operation = "increment_play_count", scene_id = %id, error = %e, "Mutation failed");
            }
        }
    }

    /// Playback progress tick for the active item. Pure bookkeeping with no
    /// server call, so the frame loop can invoke it directly.
    pub fn note_progress(&self, id: &str, position_ms: u64, duration_ms: u64) {
        self.sessions.tick(id, position_ms, duration_ms);
    }

    /// Item left view: flush its accumulated watch time once and append the
    /// confirmed seconds to the local play duration.
    pub async fn note_deactivated(&self, id: &str) {
        let Some(seconds) = self.sessions.flush(id) else {
            return;
        };
        match self.gateway.save_play_duration(id, seconds).await {
            Ok(()) => {
                self.patch_item(id, "note_deactivated", |item| item.play_duration += seconds);
            }
            Err(e) => {
                tracing::warn!(operation = "save_play_duration", scene_id = %id, error = %e, "Mutation failed");
            }
        }
    }

    async fn replace_tags(&self, id: &str, operation: &str, target: Vec<TagItem>) -> bool {
        let tag_ids: Vec<String> = target.iter().map(|t| t.id.clone()).collect();
        match self.gateway.set_scene_tags(id, &tag_ids).await {
            Ok(()) => self.patch_item(id, operation, |item| item.tags = target),
            Err(e) => {
                tracing::warn!(operation = operation, scene_id = %id, error = %e, "Mutation failed");
                false
            }
        }
    }

    /// Apply `f` to the matching loaded item. Write lock held only for the
    /// patch itself, never across an await.
    fn patch_item<F: FnOnce(&mut SceneItem)>(&self, id: &str, operation: &str, f: F) -> bool {
        let mut state = self.state.write();
        if let FeedState::Loaded(items) = &mut *state {
            if let Some(item) = items.iter_mut().find(|s| s.id == id) {
                f(item);
                return true;
            }
        }
        tracing::warn!(operation = operation, scene_id = %id, "Patch target not in loaded feed");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{ImageItem, PerformerItem, ServerStats, VersionInfo};
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::oneshot;

    fn scene(id: &str) -> SceneItem {
        SceneItem {
            id: id.to_string(),
            title: format!("Scene {}", id),
            thumbnail_url: None,
            stream_url: None,
            duration: 600.0,
            width: Some(1920),
            height: Some(1080),
            rating100: Some(40),
            o_count: 3,
            play_count: 2,
            play_duration: 120.0,
            tags: vec![TagItem::new("t1", "keep")],
            performers: vec![],
        }
    }

    /// Canned gateway: per-call scene batches, optional per-call gates for
    /// interleaving tests, and a call log.
    struct MockCatalog {
        batches: StdMutex<VecDeque<Result<Vec<SceneItem>, String>>>,
        gates: StdMutex<VecDeque<Option<oneshot::Receiver<()>>>>,
        calls: StdMutex<Vec<String>>,
        rating_result: Result<(), String>,
        tags_result: Result<(), String>,
        o_count_value: Result<i64, String>,
        play_count_value: Result<i64, String>,
        save_duration_result: Result<(), String>,
        create_tag_result: Result<TagItem, TagCreateError>,
        all_tags_result: Result<Vec<TagItem>, String>,
    }

    impl Default for MockCatalog {
        fn default() -> Self {
            Self {
                batches: StdMutex::new(VecDeque::new()),
                gates: StdMutex::new(VecDeque::new()),
                calls: StdMutex::new(Vec::new()),
                rating_result: Ok(()),
                tags_result: Ok(()),
                o_count_value: Ok(0),
                play_count_value: Ok(0),
                save_duration_result: Ok(()),
                create_tag_result: Ok(TagItem::new("t-new", "new")),
                all_tags_result: Ok(vec![]),
            }
        }
    }

    impl MockCatalog {
        fn with_batches(batches: Vec<Result<Vec<SceneItem>, String>>) -> Self {
            Self {
                batches: StdMutex::new(batches.into()),
                ..Self::default()
            }
        }

        fn log(&self, entry: String) {
            self.calls.lock().expect("call log").push(entry);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("call log").clone()
        }
    }

    #[async_trait]
    impl CatalogService for MockCatalog {
        async fn find_scenes(
            &self,
            _order: FeedOrder,
            _limit: usize,
        ) -> Result<Vec<SceneItem>, String> {
            self.log("find_scenes".to_string());
            // Claim this call's batch before parking on the gate, so a later
            // call that overtakes this one gets its own batch.
            let batch = self
                .batches
                .lock()
                .expect("batches")
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]));
            let gate = self.gates.lock().expect("gates").pop_front().flatten();
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            batch
        }

        async fn find_performers(&self, _limit: usize) -> Result<Vec<PerformerItem>, String> {
            Ok(vec![])
        }

        async fn find_images(&self, _limit: usize) -> Result<Vec<ImageItem>, String> {
            Ok(vec![])
        }

        async fn find_scene(&self, _id: &str) -> Result<Option<SceneItem>, String> {
            Ok(None)
        }

        async fn find_performer(&self, _id: &str) -> Result<Option<PerformerItem>, String> {
            Ok(None)
        }

        async fn update_performer(
            &self,
            _id: &str,
            _rating100: Option<i64>,
            _favorite: Option<bool>,
        ) -> Result<(), String> {
            Ok(())
        }

        async fn set_scene_rating(&self, id: &str, rating100: i64) -> Result<(), String> {
            self.log(format!("set_scene_rating:{}:{}", id, rating100));
            self.rating_result.clone()
        }

        async fn set_scene_tags(&self, id: &str, tag_ids: &[String]) -> Result<(), String> {
            self.log(format!("set_scene_tags:{}:{}", id, tag_ids.join(",")));
            self.tags_result.clone()
        }

        async fn increment_o_count(&self, id: &str) -> Result<i64, String> {
            self.log(format!("increment_o_count:{}", id));
            self.o_count_value.clone()
        }

        async fn reset_o_count(&self, id: &str) -> Result<i64, String> {
            self.log(format!("reset_o_count:{}", id));
            Ok(0)
        }

        async fn increment_play_count(&self, id: &str) -> Result<i64, String> {
            self.log(format!("increment_play_count:{}", id));
            self.play_count_value.clone()
        }

        async fn save_play_duration(&self, id: &str, seconds: f64) -> Result<(), String> {
            self.log(format!("save_play_duration:{}:{}", id, seconds));
            self.save_duration_result.clone()
        }

        async fn all_tags(&self) -> Result<Vec<TagItem>, String> {
            self.log("all_tags".to_string());
            self.all_tags_result.clone()
        }

        async fn create_tag(&self, name: &str) -> Result<TagItem, TagCreateError> {
            self.log(format!("create_tag:{}", name));
            self.create_tag_result.clone()
        }

        async fn stats(&self) -> Result<ServerStats, String> {
            Err("not used".to_string())
        }

        async fn version(&self) -> Result<VersionInfo, String> {
            Err("not used".to_string())
        }
    }

    /// Build a synchronizer over `mock` with `items` preloaded, keeping a
    /// handle on the mock for call-log assertions.
    async fn loaded_sync(
        mock: MockCatalog,
        items: Vec<SceneItem>,
    ) -> (FeedSynchronizer, Arc<MockCatalog>) {
        let mock = Arc::new(MockCatalog {
            batches: StdMutex::new(VecDeque::from([Ok(items)])),
            ..mock
        });
        let sync = FeedSynchronizer::new(
            Arc::clone(&mock) as Arc<dyn CatalogService>,
            FeedOrder::Random,
            50,
        );
        sync.load().await;
        (sync, mock)
    }

    // ========== Load / Refresh Tests ==========

    #[tokio::test]
    async fn test_load_success_and_error_states() {
        let mock = MockCatalog::with_batches(vec![
            Ok(vec![scene("s1")]),
            Err("Network error: connection refused".to_string()),
        ]);
        let sync = FeedSynchronizer::new(Arc::new(mock), FeedOrder::Random, 50);

        sync.load().await;
        assert!(matches!(sync.state(), FeedState::Loaded(items) if items.len() == 1));

        sync.load().await;
        assert_eq!(
            sync.state(),
            FeedState::Error("Network error: connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_stale_load_response_discarded() {
        // Call A blocks on a gate and carries batch A; call B returns batch B
        // immediately. A's response arrives last and must be dropped.
        let (gate_tx, gate_rx) = oneshot::channel();
        let mock = MockCatalog {
            batches: StdMutex::new(VecDeque::from([
                Ok(vec![scene("stale-a")]),
                Ok(vec![scene("fresh-b")]),
            ])),
            gates: StdMutex::new(VecDeque::from([Some(gate_rx), None])),
            ..MockCatalog::default()
        };
        let sync = Arc::new(FeedSynchronizer::new(
            Arc::new(mock),
            FeedOrder::Random,
            50,
        ));

        let sync_a = Arc::clone(&sync);
        let call_a = tokio::spawn(async move { sync_a.load().await });
        // Let A reach its gate so it holds generation 1.
        tokio::task::yield_now().await;

        sync.load().await;
        let _ = gate_tx.send(());
        call_a.await.expect("call A completes");

        match sync.state() {
            FeedState::Loaded(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, "fresh-b");
            }
            other => panic!("expected loaded feed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refresh_flushes_pending_sessions_and_resets_latch() {
        let mock = Arc::new(MockCatalog::with_batches(vec![
            Ok(vec![scene("s1")]),
            Ok(vec![scene("s1")]),
        ]));
        let sync = FeedSynchronizer::new(
            Arc::clone(&mock) as Arc<dyn CatalogService>,
            FeedOrder::Random,
            50,
        );
        sync.load().await;

        sync.note_activated("s1").await;
        sync.note_progress("s1", 4_000, 10_000);

        sync.refresh().await;
        assert!(mock.calls().contains(&"save_play_duration:s1:4".to_string()));

        // New load cycle: activation latches (and increments) again.
        sync.note_activated("s1").await;
        assert_eq!(
            mock.calls()
                .iter()
                .filter(|c| c.as_str() == "increment_play_count:s1")
                .count(),
            2
        );
    }

    // ========== Rating Tests ==========

    #[tokio::test]
    async fn test_mutate_rating_patches_only_rating() {
        let (sync, _mock) =
            loaded_sync(MockCatalog::default(), vec![scene("s1"), scene("s2")]).await;

        assert!(sync.mutate_rating("s1", 80).await);

        let s1 = sync.item("s1").expect("s1 loaded");
        assert_eq!(s1.rating100, Some(80));
        // No other field changed.
        assert_eq!(s1.o_count, 3);
        assert_eq!(s1.play_count, 2);
        assert_eq!(s1.tags, vec![TagItem::new("t1", "keep")]);
        // Sibling untouched.
        assert_eq!(sync.item("s2").expect("s2 loaded"), scene("s2"));
    }

    #[tokio::test]
    async fn test_mutate_rating_rejects_out_of_range_without_gateway_call() {
        let (sync, mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        assert!(!sync.mutate_rating("s1", 101).await);
        assert!(!sync.mutate_rating("s1", -1).await);

        let calls = mock.calls();
        assert!(!calls.iter().any(|c| c.starts_with("set_scene_rating")));
        assert_eq!(sync.item("s1").expect("s1").rating100, Some(40));
    }

    #[tokio::test]
    async fn test_mutate_rating_failure_leaves_state_unchanged() {
        let mock = MockCatalog {
            rating_result: Err("Server error (500)".to_string()),
            ..MockCatalog::default()
        };
        let (sync, _mock) = loaded_sync(mock, vec![scene("s1")]).await;

        assert!(!sync.mutate_rating("s1", 80).await);
        assert_eq!(sync.item("s1").expect("s1").rating100, Some(40));
    }

    // ========== O-Count Tests ==========

    #[tokio::test]
    async fn test_increment_o_count_uses_authoritative_value() {
        let mock = MockCatalog {
            // Another client incremented too: server says 7, not local 3 + 1.
            o_count_value: Ok(7),
            ..MockCatalog::default()
        };
        let (sync, _mock) = loaded_sync(mock, vec![scene("s1")]).await;

        assert_eq!(sync.increment_o_count("s1").await, Some(7));
        assert_eq!(sync.item("s1").expect("s1").o_count, 7);
    }

    #[tokio::test]
    async fn test_reset_o_count_idempotent() {
        let (sync, _mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        assert_eq!(sync.reset_o_count("s1").await, Some(0));
        assert_eq!(sync.item("s1").expect("s1").o_count, 0);
        assert_eq!(sync.reset_o_count("s1").await, Some(0));
        assert_eq!(sync.item("s1").expect("s1").o_count, 0);
    }

    #[tokio::test]
    async fn test_increment_o_count_failure_no_local_change() {
        let mock = MockCatalog {
            o_count_value: Err("Network error: timeout".to_string()),
            ..MockCatalog::default()
        };
        let (sync, _mock) = loaded_sync(mock, vec![scene("s1")]).await;

        assert_eq!(sync.increment_o_count("s1").await, None);
        assert_eq!(sync.item("s1").expect("s1").o_count, 3);
    }

    // ========== Tag Tests ==========

    #[tokio::test]
    async fn test_add_tag_sends_full_union_set() {
        let (sync, mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        assert!(sync.add_tag("s1", TagItem::new("t2", "added")).await);

        assert!(mock.calls().contains(&"set_scene_tags:s1:t1,t2".to_string()));
        assert_eq!(
            sync.item("s1").expect("s1").tags,
            vec![TagItem::new("t1", "keep"), TagItem::new("t2", "added")]
        );
    }

    #[tokio::test]
    async fn test_add_existing_tag_is_idempotent() {
        let (sync, _mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        assert!(sync.add_tag("s1", TagItem::new("t1", "keep")).await);
        assert_eq!(
            sync.item("s1").expect("s1").tags,
            vec![TagItem::new("t1", "keep")]
        );
    }

    #[tokio::test]
    async fn test_remove_tag_sends_difference_set() {
        let (sync, mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        assert!(sync.remove_tag("s1", &TagItem::new("t1", "keep")).await);

        assert!(mock.calls().contains(&"set_scene_tags:s1:".to_string()));
        assert!(sync.item("s1").expect("s1").tags.is_empty());
    }

    #[tokio::test]
    async fn test_tag_mutation_failure_keeps_local_tags() {
        let mock = MockCatalog {
            tags_result: Err("Server error (500)".to_string()),
            ..MockCatalog::default()
        };
        let (sync, _mock) = loaded_sync(mock, vec![scene("s1")]).await;

        assert!(!sync.add_tag("s1", TagItem::new("t2", "added")).await);
        assert_eq!(
            sync.item("s1").expect("s1").tags,
            vec![TagItem::new("t1", "keep")]
        );
    }

    #[tokio::test]
    async fn test_create_tag_and_attach_happy_path() {
        let (sync, _mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        assert!(sync.create_tag_and_attach("s1", "new").await);
        let tags = sync.item("s1").expect("s1").tags;
        assert!(tags.contains(&TagItem::new("t-new", "new")));
    }

    #[tokio::test]
    async fn test_create_tag_conflict_falls_back_to_lookup() {
        let mock = MockCatalog {
            create_tag_result: Err(TagCreateError::Conflict),
            all_tags_result: Ok(vec![
                TagItem::new("t9", "Existing-Tag"),
                TagItem::new("t10", "other"),
            ]),
            ..MockCatalog::default()
        };
        let (sync, _mock) = loaded_sync(mock, vec![scene("s1")]).await;

        assert!(sync.create_tag_and_attach("s1", "existing-tag").await);

        let tags = sync.item("s1").expect("s1").tags;
        // Attached via the fallback path, once.
        assert_eq!(
            tags.iter().filter(|t| t.id == "t9").count(),
            1,
            "fallback tag attached exactly once"
        );
    }

    #[tokio::test]
    async fn test_create_tag_conflict_without_match_fails_cleanly() {
        let mock = MockCatalog {
            create_tag_result: Err(TagCreateError::Conflict),
            all_tags_result: Ok(vec![TagItem::new("t10", "unrelated")]),
            ..MockCatalog::default()
        };
        let (sync, _mock) = loaded_sync(mock, vec![scene("s1")]).await;

        assert!(!sync.create_tag_and_attach("s1", "missing").await);
        assert_eq!(
            sync.item("s1").expect("s1").tags,
            vec![TagItem::new("t1", "keep")]
        );
    }

    // ========== Playback Telemetry Tests ==========

    #[tokio::test]
    async fn test_activation_increments_play_count_once() {
        let mock = MockCatalog {
            play_count_value: Ok(3),
            ..MockCatalog::default()
        };
        let (sync, mock) = loaded_sync(mock, vec![scene("s1")]).await;

        sync.note_activated("s1").await;
        sync.note_activated("s1").await;
        sync.note_deactivated("s1").await;
        sync.note_activated("s1").await;

        assert_eq!(
            mock.calls()
                .iter()
                .filter(|c| c.as_str() == "increment_play_count:s1")
                .count(),
            1
        );
        assert_eq!(sync.item("s1").expect("s1").play_count, 3);
    }

    #[tokio::test]
    async fn test_deactivation_flushes_watch_time_once() {
        let (sync, mock) = loaded_sync(MockCatalog::default(), vec![scene("s1")]).await;

        sync.note_activated("s1").await;
        sync.note_progress("s1", 4_000, 10_000);
        sync.note_progress("s1", 9_000, 10_000);

        sync.note_deactivated("s1").await;
        sync.note_deactivated("s1").await;

        let calls = mock.calls();
        assert_eq!(
            calls
                .iter()
                .filter(|c| c.starts_with("save_play_duration:s1:"))
                .count(),
            1
        );
        assert!(calls.contains(&"save_play_duration:s1:9".to_string()));
        assert_eq!(sync.item("s1").expect("s1").play_duration, 129.0);
    }
}
