use std::sync::Arc;

use nexus_core::{ExternalSources, SnapshotService};

/// Services shared across handlers.
///
/// Both services own their cache; the instances are built once in `main`
/// and live for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub sources: Arc<ExternalSources>,
    pub snapshots: Arc<SnapshotService>,
}
