use std::cell::Cell;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Backend that fails reads and/or writes, as a blocked browser store does.
pub struct FailingStorage {
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub write_attempts: Cell<usize>,
}

impl FailingStorage {
    pub fn new(fail_reads: bool, fail_writes: bool) -> Self {
        Self {
            fail_reads,
            fail_writes,
            write_attempts: Cell::new(0),
        }
    }
}

impl KeyValueStore for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            Err(StorageError::Unavailable("SecurityError: storage blocked".to_string()))
        } else {
            Ok(None)
        }
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.write_attempts.set(self.write_attempts.get() + 1);
        if self.fail_writes {
            Err(StorageError::write("QuotaExceededError"))
        } else {
            Ok(())
        }
    }
}
