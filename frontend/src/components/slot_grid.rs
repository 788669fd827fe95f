use shared::Slot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SlotGridProps {
    /// Already filtered to the active court and ordered by time
    pub slots: Vec<Slot>,
    pub loading: bool,
    pub demo: bool,
    pub on_book: Callback<Slot>,
}

#[function_component(SlotGrid)]
pub fn slot_grid(props: &SlotGridProps) -> Html {
    let body = if props.loading && props.slots.is_empty() {
        html! { <div class="loading">{"Loading schedule..."}</div> }
    } else if props.slots.is_empty() {
        html! { <p>{"No available slots for the selected date"}</p> }
    } else {
        html! {
            <>
                <h3>
                    {if props.demo { "Available slots (demo):" } else { "Available slots:" }}
                </h3>
                <div class="slots-grid">
                    {for props.slots.iter().map(|slot| slot_card(slot, &props.on_book))}
                </div>
            </>
        }
    };

    html! {
        <div id="slots-container">{body}</div>
    }
}

fn slot_card(slot: &Slot, on_book: &Callback<Slot>) -> Html {
    let (start, end) = slot.bounds();

    if slot.is_available {
        let onclick = {
            let on_book = on_book.clone();
            let slot = slot.clone();
            Callback::from(move |_: MouseEvent| on_book.emit(slot.clone()))
        };
        html! {
            <div class="slot available" onclick={onclick}>
                <strong>{format!("{}-{}", start, end)}</strong>
                <br />
                <small>{"🟢 Available"}</small>
            </div>
        }
    } else {
        html! {
            <div class="slot booked">
                <strong>{format!("{}-{}", start, end)}</strong>
                <br />
                <small>{"🔴 Booked"}</small>
                <br />
                <small>{slot.occupant()}</small>
            </div>
        }
    }
}
