pub mod mocks;

use std::rc::Rc;

use crate::storage::{ KeyValueStore, MemoryStorage, ThemeStore, THEME_KEY };

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// A `ThemeStore` over a shared memory backend, so tests can inspect what was written.
pub fn memory_store() -> (ThemeStore, Rc<MemoryStorage>) {
    let backend = Rc::new(MemoryStorage::new());
    (ThemeStore::new(backend.clone()), backend)
}

pub fn stored_theme(backend: &dyn KeyValueStore) -> Option<String> {
    backend.get_item(THEME_KEY).expect("memory backend never fails")
}
