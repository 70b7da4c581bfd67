use std::sync::Arc;
use std::time::Duration;

use crate::api::portal::Portal;
use crate::api::toast::RecordingToastSink;
use crate::configs::MemoryStore;
use crate::constants::{Env, SessionBackend};

pub fn test_env() -> Env {
    Env {
        session_backend: SessionBackend::Memory,
        simulated_latency: Duration::ZERO,
        ..Env::default()
    }
}

/// Portal over the given session store with zero latency and recorded toasts.
pub async fn portal_over(kv: Arc<MemoryStore>) -> (Portal, Arc<RecordingToastSink>) {
    let toasts = Arc::new(RecordingToastSink::new());
    let portal = Portal::with_dependencies(&test_env(), kv, toasts.clone())
        .await
        .expect("seeded portal builds");
    (portal, toasts)
}

pub async fn memory_portal() -> (Portal, Arc<RecordingToastSink>) {
    portal_over(Arc::new(MemoryStore::new())).await
}
