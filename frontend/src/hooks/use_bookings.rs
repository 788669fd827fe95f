use shared::flow::{cancellation_outcome, plan_cancellation, Plan};
use shared::widget::{Effect, WidgetAction};
use shared::{Booking, CourtType, Notice, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::load_guard::LoadGuard;
use crate::hooks::use_widget::WidgetStore;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct BookingsState {
    pub bookings: Vec<Booking>,
    pub loading: bool,
    pub demo: bool,
}

pub struct UseBookingsResult {
    pub state: BookingsState,
    pub cancel: Callback<i64>,
}

/// Entry shown when the list cannot be fetched
pub fn demo_bookings() -> Vec<Booking> {
    vec![Booking {
        id: 0,
        date: "2024-01-15".to_string(),
        time_slot: "10:00-11:00".to_string(),
        court_type: CourtType::Rubber,
    }]
}

#[hook]
pub fn use_bookings(
    api_client: &ApiClient,
    widget: &UseReducerHandle<WidgetStore>,
    user: Option<User>,
    notify: Callback<Notice>,
    demo_fallback: bool,
) -> UseBookingsResult {
    let bookings = use_state(Vec::<Booking>::new);
    let loading = use_state(|| false);
    let demo = use_state(|| false);

    let generation = widget.state.bookings_generation;

    {
        let api_client = api_client.clone();
        let bookings = bookings.clone();
        let loading = loading.clone();
        let demo = demo.clone();
        let notify = notify.clone();
        let current_user = user.clone();

        use_effect_with(generation, move |generation| {
            let guard = match current_user {
                _ if *generation == 0 => None,
                None => {
                    notify.emit(Notice::error("Please sign in first"));
                    None
                }
                Some(user) => {
                    let guard = LoadGuard::start(move |value| loading.set(value));
                    let pending = guard.clone();
                    spawn_local(async move {
                        let result = api_client.get_my_bookings(user.id).await;
                        if pending.is_stale() {
                            return;
                        }

                        match result {
                            Ok(list) => {
                                Logger::info_with_component("bookings", &format!("Loaded {} bookings", list.len()));
                                bookings.set(list);
                                demo.set(false);
                            }
                            Err(e) => {
                                Logger::error_with_component("bookings", &format!("Error loading bookings: {}", e));
                                notify.emit(Notice::error(format!("Failed to load bookings: {}", e.user_message())));
                                bookings.set(if demo_fallback { demo_bookings() } else { Vec::new() });
                                demo.set(demo_fallback);
                            }
                        }
                        pending.finish();
                    });
                    Some(guard)
                }
            };

            move || {
                if let Some(guard) = guard {
                    guard.cancel();
                }
            }
        });
    }

    let cancel = {
        let api_client = api_client.clone();
        let dispatcher = widget.dispatcher();
        let is_demo = *demo;

        use_callback((user, is_demo), move |booking_id: i64, (user, is_demo)| {
            if *is_demo {
                return;
            }

            let request = match plan_cancellation(user.as_ref(), booking_id, gloo::dialogs::confirm) {
                Plan::Submit(request) => request,
                Plan::Declined => return,
                Plan::Blocked(notice) => {
                    notify.emit(notice);
                    return;
                }
            };

            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let notify = notify.clone();
            spawn_local(async move {
                Logger::info_with_component("bookings", &format!("Cancelling booking {}", request.booking_id));
                let result = api_client.cancel_booking(request).await;
                if let Err(e) = &result {
                    Logger::error_with_component("bookings", &format!("Error canceling booking: {}", e));
                }

                let outcome = cancellation_outcome(result);
                notify.emit(outcome.notice);
                if outcome.reload {
                    dispatcher.dispatch(WidgetAction::Refresh(Effect::LoadBookings));
                }
            });
        })
    };

    UseBookingsResult {
        state: BookingsState {
            bookings: (*bookings).clone(),
            loading: *loading,
            demo: *demo,
        },
        cancel,
    }
}
