//! Browser tests for the localStorage and timer adapters.
//!
//! Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use leads_tracker::config::STORAGE_KEY;
use leads_tracker::debounce::Debouncer;
use leads_tracker::error::LeadError;
use leads_tracker::lead::{Category, Lead};
use leads_tracker::storage::{LeadStore, SnapshotStorage};
use leads_tracker::ui::browser::{LocalStorage, WindowTimers};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_storage() -> LocalStorage {
    let mut storage = LocalStorage::open();
    storage.remove(STORAGE_KEY).unwrap();
    storage
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut store = LeadStore::new(fresh_storage());
    store.add(Lead::new("https://a.com", Category::Work)).unwrap();
    store.add(Lead::new("https://b.com", Category::Reading)).unwrap();

    let mut reloaded = LeadStore::new(LocalStorage::open());
    assert_eq!(reloaded.load(), Ok(2));
    assert_eq!(reloaded.leads(), store.leads());
}

#[wasm_bindgen_test]
fn corrupt_local_storage_is_erased() {
    let mut storage = fresh_storage();
    storage.write(STORAGE_KEY, "][").unwrap();

    let mut store = LeadStore::new(storage.clone());
    assert!(matches!(store.load(), Err(LeadError::CorruptSnapshot(_))));
    assert_eq!(storage.read(STORAGE_KEY), Ok(None));
}

#[wasm_bindgen_test]
fn clear_removes_key() {
    let storage = fresh_storage();
    let mut store = LeadStore::new(storage.clone());
    store.add(Lead::new("https://a.com", Category::Uncategorized)).unwrap();

    store.clear().unwrap();

    assert_eq!(storage.read(STORAGE_KEY), Ok(None));
}

#[wasm_bindgen_test]
async fn window_timers_apply_last_query() {
    let applied = Rc::new(RefCell::new(Vec::new()));
    let debouncer = Debouncer::new(WindowTimers, 20);

    for query in ["r", "ru", "rust"] {
        let applied = Rc::clone(&applied);
        debouncer.schedule(move || applied.borrow_mut().push(query));
    }

    sleep_ms(100).await;

    assert_eq!(*applied.borrow(), vec!["rust"]);
    assert!(!debouncer.is_pending());
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}
