use gloo::timers::future::TimeoutFuture;
use shared::Tone;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

pub struct UseNotificationResult {
    pub notice: Option<Notice>,
    pub show: Callback<Notice>,
    pub hide: Callback<()>,
}

/// Status line that hides itself `timeout_ms` after the latest `show`.
/// An older timer never hides a newer notice.
#[hook]
pub fn use_notification(timeout_ms: u32) -> UseNotificationResult {
    let notice = use_state(|| Option::<Notice>::None);
    let generation = use_mut_ref(|| 0u32);

    let show = {
        let notice = notice.clone();
        let generation = generation.clone();
        Callback::from(move |next: Notice| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation = generation.wrapping_add(1);
                *generation
            };
            notice.set(Some(next));

            let notice = notice.clone();
            let generation = generation.clone();
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                if *generation.borrow() == current {
                    notice.set(None);
                }
            });
        })
    };

    let hide = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    UseNotificationResult {
        notice: (*notice).clone(),
        show,
        hide,
    }
}
