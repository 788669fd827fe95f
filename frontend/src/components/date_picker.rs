use shared::schedule::effective_date;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils::{format_date_for_display, get_current_date, is_today};

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Selected date in YYYY-MM-DD format
    pub selected_date: String,
    /// Callback when date changes
    pub on_date_change: Callback<String>,
}

/// `#date-picker`: native date input that refuses days before today
#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let today = get_current_date();

    let on_change = {
        let on_date_change = props.on_date_change.clone();
        let today = today.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            // The state may already hold today, so the rerender would not touch the input
            if let Ok(clamped) = effective_date(&value, &today) {
                if clamped != value {
                    input.set_value(&clamped);
                }
            }
            on_date_change.emit(value);
        })
    };

    let caption = if is_today(&props.selected_date) {
        "Today".to_string()
    } else {
        format_date_for_display(&props.selected_date)
    };

    html! {
        <div class="date-picker">
            <label for="date-picker">{"Choose a date:"}</label>
            <input
                type="date"
                id="date-picker"
                value={props.selected_date.clone()}
                min={today}
                onchange={on_change}
            />
            <span class="date-caption">{caption}</span>
        </div>
    }
}
