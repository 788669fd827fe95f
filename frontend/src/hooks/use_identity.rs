use gloo::timers::future::TimeoutFuture;
use shared::identity::{
    reset_identity, CachedProfileResolver, GuestResolver, HostContextResolver, IdentityCascade,
    IdentityOutcome, SimulatedResolver,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::WidgetConfig;
use crate::services::host_context::{query_string, TelegramWebApp};
use crate::services::logging::Logger;
use crate::services::storage::LocalProfileStore;

#[derive(Clone, PartialEq)]
pub struct IdentityState {
    pub outcome: Option<IdentityOutcome>,
    /// Initialisation could not run at all (no `window`)
    pub failed: bool,
}

pub struct UseIdentityResult {
    pub state: IdentityState,
    pub reset: Callback<()>,
}

/// Resolution order used by the widget
pub fn browser_cascade() -> IdentityCascade {
    IdentityCascade::new(GuestResolver::new(random_guest_id))
        .with(HostContextResolver::primary(TelegramWebApp::primary().map(TelegramWebApp::boxed)))
        .with(HostContextResolver::alternate(TelegramWebApp::alternate().map(TelegramWebApp::boxed)))
        .with(SimulatedResolver::new(SimulatedResolver::flag_in_query(&query_string())))
        .with(CachedProfileResolver)
}

fn random_guest_id() -> i64 {
    (js_sys::Math::random() * 1_000_000.0).floor() as i64
}

#[hook]
pub fn use_identity(config: &WidgetConfig) -> UseIdentityResult {
    let outcome = use_state(|| Option::<IdentityOutcome>::None);
    let failed = use_state(|| false);
    let store = LocalProfileStore::new(config.profile_storage_key.clone());

    {
        let outcome = outcome.clone();
        let failed = failed.clone();
        let store = store.clone();

        use_effect_with((), move |_| {
            if web_sys::window().is_none() {
                Logger::error_with_component("identity", "No window object, cannot initialise");
                failed.set(true);
            } else {
                let resolved = browser_cascade().resolve(&store);
                if let Some(e) = &resolved.persist_error {
                    Logger::warn_with_component("identity", &format!("Profile not cached: {}", e));
                }
                if resolved.host_detected_without_user {
                    Logger::warn_with_component("identity", "WebApp found but it carried no user data");
                }
                Logger::info_with_component(
                    "identity",
                    &format!(
                        "Resolved user {} ({}) via {}",
                        resolved.user.id,
                        resolved.user.first_name,
                        resolved.source.as_str()
                    ),
                );
                outcome.set(Some(resolved));
            }
            || ()
        });
    }

    let reset = {
        let outcome = outcome.clone();
        let delay_ms = config.reset_reload_delay_ms;

        use_callback((store, delay_ms), move |_, (store, delay_ms)| {
            reset_identity(store);
            outcome.set(None);
            Logger::info_with_component("identity", "Profile cleared, reloading");

            let delay_ms = *delay_ms;
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().reload() {
                        Logger::error_with_component("identity", &format!("Reload failed: {:?}", e));
                    }
                }
            });
        })
    };

    UseIdentityResult {
        state: IdentityState {
            outcome: (*outcome).clone(),
            failed: *failed,
        },
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::identity::{IdentitySource, ProfileStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_plain_browser_gets_a_guest() {
        let store = LocalProfileStore::new("courtBookingGuestTest");
        store.clear();
        let outcome = browser_cascade().resolve(&store);
        assert_eq!(outcome.source, IdentitySource::Guest);
        assert!((0..1_000_000).contains(&outcome.user.id));
        assert_eq!(store.load(), Some(outcome.user.clone()));
        store.clear();
    }
}
