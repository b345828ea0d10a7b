use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::models::{ActivityRow, StudentRow};

/// Handle shared by every request handler. Each service call takes the lock
/// once, so cascades across both maps are never observed half-done.
pub type SharedStore = Arc<RwLock<Store>>;

/// In-memory backing store for activities (keyed by name) and students (keyed
/// by email). Both maps iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) activities: IndexMap<String, ActivityRow>,
    pub(crate) students: IndexMap<String, StudentRow>,
}

impl Store {
    pub fn new(
        activities: IndexMap<String, ActivityRow>,
        students: IndexMap<String, StudentRow>,
    ) -> Self {
        Self {
            activities,
            students,
        }
    }

    /// Store populated with the school's fixed activity catalog and roster.
    pub fn seeded() -> Self {
        super::seed::seed_store()
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }
}
