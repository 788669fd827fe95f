mod components;
mod config;
mod hooks;
mod services;

use shared::widget::{Tab, WidgetAction};
use shared::CourtType;
use yew::prelude::*;

use components::bookings_list::BookingsList;
use components::court_selector::CourtSelector;
use components::date_picker::DatePicker;
use components::header::Header;
use components::notice_banner::NoticeBanner;
use components::slot_grid::SlotGrid;
use components::tab_bar::TabBar;
use config::WidgetConfig;
use hooks::use_bookings::use_bookings;
use hooks::use_identity::use_identity;
use hooks::use_notice::use_notice;
use hooks::use_slots::use_slots;
use hooks::use_widget::use_widget;
use services::api::ApiClient;
use services::logging::Logger;

/// Element the widget mounts into; falls back to `<body>` when absent
const MOUNT_ELEMENT_ID: &str = "booking-widget";

#[derive(Properties, PartialEq)]
struct AppProps {
    config: WidgetConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let api_client = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });

    let identity = use_identity(config);
    let widget = use_widget();
    let notice = use_notice(config.message_timeout_ms);

    let user = identity.state.outcome.as_ref().map(|outcome| outcome.user.clone());
    let slots = use_slots(&api_client, &widget, user.clone(), notice.show.clone(), config.demo_fallback);
    let bookings = use_bookings(&api_client, &widget, user, notice.show.clone(), config.demo_fallback);

    // Controls stay inert until a user has been resolved
    {
        let widget = widget.clone();
        let resolved = identity.state.outcome.is_some();
        use_effect_with(resolved, move |resolved| {
            if *resolved {
                Logger::info_with_component("app", "App initialized");
                widget.dispatch(WidgetAction::Ready);
            }
            || ()
        });
    }

    let on_tab = {
        let widget = widget.clone();
        Callback::from(move |tab: Tab| {
            Logger::debug_with_component("app", &format!("Switching to tab: {}", tab.as_str()));
            widget.dispatch(WidgetAction::SelectTab(tab));
        })
    };

    let on_court = {
        let widget = widget.clone();
        Callback::from(move |court: CourtType| widget.dispatch(WidgetAction::SelectCourt(court)))
    };

    let on_date = {
        let widget = widget.clone();
        Callback::from(move |date: String| widget.dispatch(WidgetAction::SelectDate(date)))
    };

    if identity.state.failed {
        return html! {
            <div id="error-message" class="error">{"Failed to load. Please reload the page."}</div>
        };
    }

    let state = &widget.state;
    let panel_class = |tab: Tab| classes!("tab-content", state.is_active_tab(tab).then_some("active"));

    html! {
        <>
            <Header identity={identity.state.outcome.clone()} on_reset={identity.reset.clone()} />
            <NoticeBanner notice={notice.notice.clone()} />

            {if !state.ready {
                html! { <div id="loading" class="loading">{"Loading..."}</div> }
            } else {
                html! {
                    <main id="content">
                        <TabBar active={state.tab} on_select={on_tab} />

                        <section id={Tab::Slots.panel_id()} class={panel_class(Tab::Slots)}>
                            <DatePicker selected_date={state.date.clone()} on_date_change={on_date} />
                            <CourtSelector active={state.court} on_select={on_court} />
                            <SlotGrid
                                slots={slots.state.slots.clone()}
                                loading={slots.state.loading}
                                demo={slots.state.demo}
                                on_book={slots.book.clone()}
                            />
                        </section>

                        <section id={Tab::MyBookings.panel_id()} class={panel_class(Tab::MyBookings)}>
                            <h3>{"My bookings:"}</h3>
                            <BookingsList
                                bookings={bookings.state.bookings.clone()}
                                loading={bookings.state.loading}
                                demo={bookings.state.demo}
                                on_cancel={bookings.cancel.clone()}
                            />
                        </section>
                    </main>
                }
            }}
        </>
    }
}

fn main() {
    let config = WidgetConfig::load();
    Logger::init(config.log_level);
    Logger::info_with_component("app", "Court booking widget starting");

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_ELEMENT_ID));

    match root {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
        }
        None => {
            Logger::warn_with_component("app", &format!("#{} not found, mounting on body", MOUNT_ELEMENT_ID));
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
    }
}
