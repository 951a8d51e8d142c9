use yew::prelude::*;

use crate::hooks::use_notification::Notice;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="notification" class={notice.tone.css_class()}>
            <span>{&notice.text}</span>
            <button type="button" class="notification-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
