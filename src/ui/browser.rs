/// Browser-backed capabilities: localStorage, window timers and the tab bridge

use log::warn;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::debounce::TimerHost;
use crate::error::{LeadError, StorageError};
use crate::storage::SnapshotStorage;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;
}

/// The part of a `chrome.tabs.Tab` we care about
#[derive(Debug, Deserialize)]
struct ActiveTab {
    url: Option<String>,
}

/// URL of the active tab in the current window.
///
/// Fails with [`LeadError::HostUnavailable`] outside an extension context;
/// `Ok(None)` means there is no active tab or it has no URL.
pub async fn active_tab_url() -> Result<Option<String>, LeadError> {
    let tab_js = getActiveTab().await.map_err(|e| {
        warn!("Tab query failed: {}", js_error_message(&e));
        LeadError::HostUnavailable
    })?;

    if tab_js.is_null() || tab_js.is_undefined() {
        return Ok(None);
    }

    let tab: ActiveTab = serde_wasm_bindgen::from_value(tab_js).map_err(|e| {
        warn!("Failed to parse tab: {:?}", e);
        LeadError::TabUrlUnavailable
    })?;

    Ok(tab.url)
}

/// Ask the user to confirm with the browser's native dialog
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage` as snapshot storage
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is not available");
        }
        LocalStorage { storage }
    }

    fn handle(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError("localStorage is not available".to_string()))
    }
}

impl SnapshotStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.handle()?
            .get_item(key)
            .map_err(|e| StorageError(js_error_message(&e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| StorageError(js_error_message(&e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.handle()?
            .remove_item(key)
            .map_err(|e| StorageError(js_error_message(&e)))
    }
}

/// A `setTimeout` registration; the closure must outlive the timer
pub struct ScheduledTimeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

/// `window.setTimeout` / `clearTimeout` as a timer host
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowTimers;

impl TimerHost for WindowTimers {
    type Handle = Option<ScheduledTimeout>;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Option<ScheduledTimeout> {
        let window = web_sys::window()?;
        let callback = Closure::once(callback);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => Some(ScheduledTimeout {
                id,
                _callback: callback,
            }),
            Err(e) => {
                warn!("setTimeout failed: {}", js_error_message(&e));
                None
            }
        }
    }

    fn cancel(&self, handle: Option<ScheduledTimeout>) {
        if let (Some(timeout), Some(window)) = (handle, web_sys::window()) {
            window.clear_timeout_with_handle(timeout.id);
        }
    }
}
