//! Tax config - View Model

use super::model::fetch_config;
use crate::layout::ToastService;
use contracts::domain::tax::TaxConfig;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct TaxConfigVm {
    pub config: RwSignal<Option<TaxConfig>>,
    pub is_loading: RwSignal<bool>,
}

impl TaxConfigVm {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(None),
            is_loading: RwSignal::new(true),
        }
    }

    /// Fetch again. A failed refresh keeps whatever was loaded before.
    pub fn load(&self, toasts: ToastService) {
        let vm = *self;
        vm.is_loading.set(true);
        spawn_local(async move {
            match fetch_config().await {
                Ok(config) => {
                    log::debug!("Loaded tax config {} ({})", config.config_name, config.source.label());
                    vm.config.set(Some(config));
                }
                Err(e) => {
                    log::error!("Failed to load configuration: {}", e);
                    toasts.error(e.user_message("Failed to load configuration"));
                }
            }
            vm.is_loading.set(false);
        });
    }
}

impl Default for TaxConfigVm {
    fn default() -> Self {
        Self::new()
    }
}
