use shared::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

/// `#error-message`, styled `error` or `success`, hidden when empty
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div id="error-message" class={notice.kind.css_class()}>{&notice.text}</div>
        },
        None => html! {
            <div id="error-message" class="hidden"></div>
        },
    }
}
