//! Request lifetime of one screen
//!
//! Every request a screen issues carries the screen's `AbortSignal`. When the
//! screen unmounts the controller is aborted, in-flight requests fail with
//! `ApiError::Aborted` and their results are dropped.

use leptos::prelude::*;
use web_sys::{AbortController, AbortSignal};

pub struct ScreenLifetime {
    controller: Option<AbortController>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::warn!("AbortController unavailable, requests are not cancellable: {:?}", e);
                None
            }
        };
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn is_aborted(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|c| c.signal().aborted())
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifetime bound to the current reactive owner, aborted on its cleanup
pub fn use_screen_lifetime() -> StoredValue<ScreenLifetime, LocalStorage> {
    let lifetime = StoredValue::new_local(ScreenLifetime::new());
    on_cleanup(move || {
        lifetime.try_with_value(ScreenLifetime::abort);
    });
    lifetime
}
