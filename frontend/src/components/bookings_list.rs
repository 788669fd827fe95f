use shared::Booking;
use yew::prelude::*;

use crate::services::date_utils::format_date_for_display;

#[derive(Properties, PartialEq)]
pub struct BookingsListProps {
    pub bookings: Vec<Booking>,
    pub loading: bool,
    pub demo: bool,
    pub on_cancel: Callback<i64>,
}

#[function_component(BookingsList)]
pub fn bookings_list(props: &BookingsListProps) -> Html {
    let body = if props.loading && props.bookings.is_empty() {
        html! { <div class="loading">{"Loading bookings..."}</div> }
    } else if props.bookings.is_empty() {
        html! { <p>{"You have no active bookings"}</p> }
    } else {
        html! {
            <>
                {for props.bookings.iter().map(|booking| {
                    let on_cancel = props.on_cancel.clone();
                    let id = booking.id;
                    html! {
                        <div class="slot" key={booking.id}>
                            <strong>{format_date_for_display(&booking.date)}</strong>
                            <br />
                            {format!("{} ({})", booking.display_time(), booking.court_type.label())}
                            <button
                                class="btn-small btn-danger"
                                onclick={Callback::from(move |_: MouseEvent| on_cancel.emit(id))}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    }
                })}
                {if props.demo {
                    html! { <p><small>{"This is test data"}</small></p> }
                } else {
                    html! {}
                }}
            </>
        }
    };

    html! {
        <div id="bookings-list">{body}</div>
    }
}
