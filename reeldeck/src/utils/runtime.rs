/// Global Tokio runtime for async gateway operations
///
/// egui drives a synchronous frame loop, but reqwest requires a tokio
/// runtime. This static runtime bridges the two:
/// 1. Handlers spawn gateway calls onto it from the frame loop
/// 2. Results come back through the app's event channel (or the feed
///    synchronizer's own state cell) and are picked up next frame
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = gateway.stats().await;
///     let _ = event_tx.send(AppEvent::StatsResult(result)).await;
/// });
/// ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async gateway operations")
});
