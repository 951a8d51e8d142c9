use shared::{outcome, RegistrationForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::feedback::present;
use crate::services::logging::Logger;

const COMPONENT: &str = "register";

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub api_client: ApiClient,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let form = use_state(RegistrationForm::default);
    let submitting = use_state(|| false);
    let status = use_state(|| Option::<String>::None);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            match field {
                Field::Name => next.name = input.value(),
                Field::Email => next.email = input.value(),
                Field::Password => next.password = input.value(),
                Field::ConfirmPassword => next.confirm_password = input.value(),
            }
            form.set(next);
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match form.register_request() {
                Ok(request) => request,
                Err(err) => {
                    if let Some(feedback) = outcome::register(&Err(err.into())).feedback {
                        present(feedback, &status);
                    }
                    return;
                }
            };

            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let status = status.clone();
            submitting.set(true);

            spawn_local(async move {
                Logger::info_with_component(COMPONENT, &format!("Registering {}", request.email));
                let result = api_client.register(&request).await;
                if let Err(e) = &result {
                    Logger::error_with_component(COMPONENT, &format!("Registration failed: {}", e));
                }
                submitting.set(false);
                if let Some(feedback) = outcome::register(&result).feedback {
                    present(feedback, &status);
                }
            });
        })
    };

    html! {
        <section class="register-section">
            <h2>{"Create an account"}</h2>
            <form id="registerForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" name="name" value={form.name.clone()} oninput={on_input(Field::Name)} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" name="email" value={form.email.clone()} oninput={on_input(Field::Email)} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" name="password" value={form.password.clone()} oninput={on_input(Field::Password)} />
                </div>
                <div class="form-group">
                    <label for="confirmPassword">{"Confirm password"}</label>
                    <input
                        type="password"
                        id="confirmPassword"
                        name="confirmPassword"
                        value={form.confirm_password.clone()}
                        oninput={on_input(Field::ConfirmPassword)}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>{"Register"}</button>
            </form>
            <p id="statusMessage">{(*status).clone().unwrap_or_default()}</p>
        </section>
    }
}
