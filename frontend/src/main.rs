use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::books::books_page::BooksPage;
use components::contact_form::ContactForm;
use components::fantasy::fantasy_page::FantasyPage;
use components::header::Header;
use components::register_form::RegisterForm;
use components::users_page::UsersPage;
use config::AppConfig;
use services::api::ApiClient;
use services::logging::Logger;

/// Top-level views reachable from the header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Books,
    Fantasy,
    Contact,
    Account,
    Admin,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Books => "Books",
            Page::Fantasy => "Fantasy",
            Page::Contact => "Contact",
            Page::Account => "Account",
            Page::Admin => "Admin",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::from_config(&config)
    });
    let page = use_state(|| Page::Books);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("navigate to {}", next.title()));
            page.set(next);
        })
    };

    let api_client = (*api_client).clone();
    let content = match *page {
        Page::Books => html! { <BooksPage api_client={api_client} /> },
        Page::Fantasy => html! { <FantasyPage api_client={api_client} config={(*config).clone()} /> },
        Page::Contact => html! {
            <ContactForm api_client={api_client} notification_timeout_ms={config.notification_timeout_ms} />
        },
        Page::Account => html! { <RegisterForm api_client={api_client} /> },
        Page::Admin => html! { <UsersPage api_client={api_client} /> },
    };

    html! {
        <>
            <Header current={*page} on_navigate={on_navigate} />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_page_titles() {
        assert_eq!(Page::Books.title(), "Books");
        assert_eq!(Page::Admin.title(), "Admin");
    }

    #[wasm_bindgen_test]
    fn test_default_client_uses_default_config() {
        let config = AppConfig::default();
        assert_eq!(ApiClient::from_config(&config), ApiClient::new());
    }
}
