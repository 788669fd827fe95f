use shared::identity::IdentityOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// None while loading and after a reset
    pub identity: Option<IdentityOutcome>,
    pub on_reset: Callback<()>,
}

/// Title bar with the `#user-info` panel
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_reset_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let user_info = match &props.identity {
        None => html! { <div id="user-info" class="hidden"></div> },
        Some(outcome) if outcome.user.is_platform_user => html! {
            <div id="user-info">
                {"🎉 Welcome, "}<strong id="user-name">{&outcome.user.first_name}</strong>{"!"}
                <br /><small>{"Telegram WebApp active"}</small>
                <button class="btn-small" onclick={on_reset_click}>{"Reset"}</button>
            </div>
        },
        Some(outcome) if outcome.host_detected_without_user => html! {
            <div id="user-info">
                {"🔧 Telegram WebApp detected"}
                <br /><small>{"but no user data was received"}</small>
                <br />{"Booking as "}<strong id="user-name">{&outcome.user.first_name}</strong>
                <button class="btn-small" onclick={on_reset_click}>{"Reset"}</button>
            </div>
        },
        Some(outcome) => html! {
            <div id="user-info">
                {"👤 "}<span id="user-name">{&outcome.user.first_name}</span>
                <button class="btn-small" onclick={on_reset_click}>{"Reset"}</button>
            </div>
        },
    };

    html! {
        <header class="header">
            <h1>{"🎾 Tennis court booking"}</h1>
            {user_info}
        </header>
    }
}
