use shared::CourtType;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CourtSelectorProps {
    pub active: CourtType,
    pub on_select: Callback<CourtType>,
}

#[function_component(CourtSelector)]
pub fn court_selector(props: &CourtSelectorProps) -> Html {
    html! {
        <div class="court-selector">
            <h3>{"Choose a court:"}</h3>
            {for CourtType::ALL.iter().map(|court| {
                let court = *court;
                let class = classes!("court-button", (props.active == court).then_some("active"));
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={class}
                        data-court={court.as_str()}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(court))}
                    >
                        {court.label()}
                    </button>
                }
            })}
        </div>
    }
}
