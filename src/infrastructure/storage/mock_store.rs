use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// In-memory staging store for tests. Retains stored bytes so fetch and
/// delete behave like the real store.
#[derive(Default)]
pub struct MockStagingStore {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MockStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &StoragePath) -> bool {
        self.objects
            .lock()
            .expect("mock store lock poisoned")
            .contains_key(path.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.objects
            .lock()
            .expect("mock store lock poisoned")
            .is_empty()
    }
}

#[async_trait::async_trait]
impl StagingStore for MockStagingStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, StagingStoreError> {
        let size = data.len() as u64;
        self.objects
            .lock()
            .expect("mock store lock poisoned")
            .insert(path.as_str().to_string(), data);
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        self.objects
            .lock()
            .expect("mock store lock poisoned")
            .get(path.as_str())
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| StagingStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        self.objects
            .lock()
            .expect("mock store lock poisoned")
            .remove(path.as_str());
        Ok(())
    }
}
