use gloo::timers::future::TimeoutFuture;
use shared::Notice;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseNoticeResult {
    pub notice: Option<Notice>,
    pub show: Callback<Notice>,
}

/// Single transient banner. A new notice replaces the current one and each
/// dismissal timer only clears the notice it was started for.
#[hook]
pub fn use_notice(timeout_ms: u32) -> UseNoticeResult {
    let notice = use_state(|| Option::<Notice>::None);
    let latest = use_mut_ref(|| 0u32);

    let show = {
        let notice = notice.clone();
        let latest = latest.clone();

        use_callback(timeout_ms, move |next: Notice, timeout_ms| {
            let id = {
                let mut latest = latest.borrow_mut();
                *latest = latest.wrapping_add(1);
                *latest
            };
            notice.set(Some(next));

            let notice = notice.clone();
            let latest = latest.clone();
            let timeout_ms = *timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                if *latest.borrow() == id {
                    notice.set(None);
                }
            });
        })
    };

    UseNoticeResult {
        notice: (*notice).clone(),
        show,
    }
}
