use shared::{outcome, FantasyBook};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::feedback::alert;
use crate::services::logging::Logger;

const COMPONENT: &str = "fantasy";

#[derive(Clone)]
pub struct FantasyState {
    pub books: Vec<FantasyBook>,
    pub loading: bool,
    /// Replaces the cards when the catalog could not be loaded
    pub load_error: Option<String>,
    /// Book id of the purchase in flight
    pub buying: Option<u64>,
}

pub struct UseFantasyResult {
    pub state: FantasyState,
    pub actions: UseFantasyActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFantasyActions {
    pub buy: Callback<u64>,
}

#[hook]
pub fn use_fantasy(api_client: &ApiClient) -> UseFantasyResult {
    let books = use_state(Vec::<FantasyBook>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| Option::<String>::None);
    let buying = use_state(|| Option::<u64>::None);

    {
        let api_client = api_client.clone();
        let books = books.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.fantasy_books().await {
                    Ok(data) => books.set(data),
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Error loading fantasy books: {}", e),
                        );
                        load_error.set(Some(outcome::FANTASY_LOAD_FAILED.to_string()));
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    let buy = {
        let api_client = api_client.clone();
        let buying = buying.clone();

        Callback::from(move |book_id: u64| {
            if buying.is_some() {
                return;
            }
            let api_client = api_client.clone();
            let buying = buying.clone();
            buying.set(Some(book_id));

            spawn_local(async move {
                let result = api_client.purchase(book_id).await;
                if let Err(e) = &result {
                    Logger::error_with_component(
                        COMPONENT,
                        &format!("Error purchasing book {}: {}", book_id, e),
                    );
                }
                buying.set(None);
                alert(outcome::purchase(&result));
            });
        })
    };

    UseFantasyResult {
        state: FantasyState {
            books: (*books).clone(),
            loading: *loading,
            load_error: (*load_error).clone(),
            buying: *buying,
        },
        actions: UseFantasyActions { buy },
    }
}
