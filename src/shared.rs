use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    consumption,
    directory::{AllocationDirectory, LookupStatus, Placement},
    error::AviaryError,
    record::{BirdRecord, Food},
};

/// Handle for hosts that reach one directory from several tasks.
///
/// Mutations hold the write lock for their whole check-then-act sequence, so
/// readers never see a half-applied assignment. Clones share the directory.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<RwLock<AllocationDirectory>>,
}

impl SharedDirectory {
    pub fn new(directory: AllocationDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub async fn intake(&self, record: BirdRecord) -> Result<(), AviaryError> {
        self.inner.write().await.intake(record)
    }

    pub async fn assign(&self, record: &BirdRecord) -> Result<Placement, AviaryError> {
        self.inner.write().await.assign(record)
    }

    pub async fn lookup(&self, record: &BirdRecord) -> LookupStatus {
        self.inner.read().await.lookup(record)
    }

    pub async fn consumption_totals(&self) -> BTreeMap<Food, u32> {
        consumption::consumption_totals(&*self.inner.read().await)
    }

    pub async fn snapshot(&self) -> AllocationDirectory {
        self.inner.read().await.clone()
    }
}
