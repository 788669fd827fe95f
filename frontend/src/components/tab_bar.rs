use shared::widget::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs">
            {for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let class = classes!("tab", (props.active == tab).then_some("active"));
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={class}
                        data-tab={tab.as_str()}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(tab))}
                    >
                        {tab.label()}
                    </button>
                }
            })}
        </div>
    }
}
