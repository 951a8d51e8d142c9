use shared::{outcome, Feedback};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use super::notification::Notification;
use crate::hooks::use_notification::{use_notification, Notice};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "contact";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub api_client: ApiClient,
    pub notification_timeout_ms: u32,
}

/// Contact form sent as multipart data so the optional attachment goes
/// along with the text fields.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let sending = use_state(|| false);
    let notification = use_notification(props.notification_timeout_ms);

    let on_submit = {
        let api_client = props.api_client.clone();
        let form_ref = form_ref.clone();
        let sending = sending.clone();
        let show = notification.show.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                Logger::error_with_component(COMPONENT, "Form not found!");
                return;
            };

            let api_client = api_client.clone();
            let sending = sending.clone();
            let show = show.clone();
            sending.set(true);

            spawn_local(async move {
                let result = api_client.send_message(&form).await;
                if let Err(e) = &result {
                    Logger::error_with_component(
                        COMPONENT,
                        &format!("Error sending message: {}", e),
                    );
                }
                sending.set(false);

                let outcome = outcome::send_message(&result);
                if outcome.refresh {
                    form.reset();
                }
                if let Some(Feedback::Notice { text, tone }) = outcome.feedback {
                    show.emit(Notice { text, tone });
                }
            });
        })
    };

    html! {
        <section class="contact-section">
            <h2>{"Send us a message"}</h2>
            <form
                id="sendMessageForm"
                ref={form_ref}
                action="/send-message"
                method="POST"
                enctype="multipart/form-data"
                onsubmit={on_submit}
            >
                <div class="form-group">
                    <label for="to">{"To"}</label>
                    <input type="email" id="to" name="to" />
                </div>
                <div class="form-group">
                    <label for="subject">{"Subject"}</label>
                    <input type="text" id="subject" name="subject" />
                </div>
                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea id="message" name="message" rows="5"></textarea>
                </div>
                <div class="form-group">
                    <label for="attachment">{"Attachment"}</label>
                    <input type="file" id="attachment" name="attachment" />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*sending}>
                    {if *sending { "Sending..." } else { "Send" }}
                </button>
            </form>
            <Notification notice={notification.notice.clone()} on_close={notification.hide.clone()} />
        </section>
    }
}
