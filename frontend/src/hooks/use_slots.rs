use shared::flow::{booking_outcome, plan_booking, Plan};
use shared::schedule::{court_schedule, demo_slots};
use shared::widget::{Effect, WidgetAction};
use shared::{Notice, Slot, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::load_guard::LoadGuard;
use crate::hooks::use_widget::WidgetStore;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct SlotsState {
    /// Slots of the current court in time order
    pub slots: Vec<Slot>,
    pub loading: bool,
    /// The list is demonstration data shown because loading failed
    pub demo: bool,
}

pub struct UseSlotsResult {
    pub state: SlotsState,
    pub book: Callback<Slot>,
}

#[hook]
pub fn use_slots(
    api_client: &ApiClient,
    widget: &UseReducerHandle<WidgetStore>,
    user: Option<User>,
    notify: Callback<Notice>,
    demo_fallback: bool,
) -> UseSlotsResult {
    let fetched = use_state(Vec::<Slot>::new);
    let loading = use_state(|| false);
    let demo = use_state(|| false);

    let generation = widget.state.slots_generation;
    let court = widget.state.court;
    let date = widget.state.date.clone();

    {
        let api_client = api_client.clone();
        let fetched = fetched.clone();
        let loading = loading.clone();
        let demo = demo.clone();
        let notify = notify.clone();

        use_effect_with((generation, court, date), move |(generation, court, date)| {
            let guard = (*generation > 0 && !date.is_empty()).then(|| {
                let guard = LoadGuard::start(move |value| loading.set(value));
                let pending = guard.clone();
                let court = *court;
                let date = date.clone();

                spawn_local(async move {
                    Logger::info_with_component("slots", &format!("Fetching slots for {} ({})", date, court));

                    let result = api_client.get_slots(&date).await;
                    if pending.is_stale() {
                        Logger::debug_with_component("slots", &format!("Dropping stale response for {}", date));
                        return;
                    }

                    match result {
                        Ok(slots) => {
                            Logger::info_with_component("slots", &format!("Loaded {} slots", slots.len()));
                            fetched.set(slots);
                            demo.set(false);
                        }
                        Err(e) => {
                            Logger::error_with_component("slots", &format!("Error loading slots: {}", e));
                            notify.emit(Notice::error(format!("Failed to load schedule: {}", e.user_message())));
                            if demo_fallback {
                                fetched.set(demo_slots(&date, court));
                                demo.set(true);
                            } else {
                                fetched.set(Vec::new());
                                demo.set(false);
                            }
                        }
                    }
                    pending.finish();
                });
                guard
            });

            move || {
                if let Some(guard) = guard {
                    guard.cancel();
                }
            }
        });
    }

    let book = {
        let api_client = api_client.clone();
        let dispatcher = widget.dispatcher();
        let is_demo = *demo;

        use_callback((user, is_demo), move |slot: Slot, (user, is_demo)| {
            if *is_demo {
                gloo::dialogs::alert("This is a demo slot. Booking is temporarily unavailable.");
                return;
            }

            let request = match plan_booking(user.as_ref(), &slot, gloo::dialogs::confirm) {
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
                Logger::info_with_component(
                    "slots",
                    &format!("Booking {} {} {}", request.date, request.time_slot, request.court_type),
                );
                let result = api_client.book_slot(&request).await;
                if let Err(e) = &result {
                    Logger::error_with_component("slots", &format!("Error booking slot: {}", e));
                }

                let outcome = booking_outcome(result);
                notify.emit(outcome.notice);
                if outcome.reload {
                    dispatcher.dispatch(WidgetAction::Refresh(Effect::LoadSlots));
                }
            });
        })
    };

    UseSlotsResult {
        state: SlotsState {
            slots: court_schedule(&fetched, court),
            loading: *loading,
            demo: *demo,
        },
        book,
    }
}
