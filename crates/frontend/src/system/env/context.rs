//! Environment config shared through context

use super::api;
use crate::shared::api_utils::set_api_base_override;
use contracts::system::env::EnvConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct EnvContext {
    pub config: RwSignal<EnvConfig>,
    /// Set once the load attempt finished, successful or not
    pub loaded: RwSignal<bool>,
}

impl EnvContext {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(EnvConfig::default()),
            loaded: RwSignal::new(false),
        }
    }

    /// Load `/api/env` once. On failure the defaults stay in place.
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_env().await {
                Ok(config) => {
                    log::info!("environment loaded: {}", config.factory_name);
                    set_api_base_override(config.api_base_override());
                    this.config.set(config);
                }
                Err(e) => {
                    log::warn!("failed to load environment, using defaults: {}", e);
                }
            }
            this.loaded.set(true);
        });
    }
}

pub fn use_env() -> EnvContext {
    use_context::<EnvContext>().expect("EnvContext not found")
}
