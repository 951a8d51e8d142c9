use shared::{outcome, User, UserRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::feedback::apply;
use crate::services::logging::Logger;

const COMPONENT: &str = "admin-users";

#[derive(Clone)]
pub struct UsersState {
    pub users: Vec<User>,
    pub loading: bool,
    pub busy: bool,
    pub error: Option<String>,
}

pub struct UseUsersResult {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseUsersActions {
    pub refresh: Callback<()>,
    pub change_role: Callback<(u64, UserRole)>,
    pub delete_user: Callback<u64>,
}

#[hook]
pub fn use_users(api_client: &ApiClient) -> UseUsersResult {
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| false);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let users = users.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_users().await {
                    Ok(data) => {
                        error.set(None);
                        users.set(data);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to fetch users: {}", e),
                        );
                        error.set(Some("Failed to fetch users".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load the user list on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let change_role = {
        let api_client = api_client.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |(user_id, role): (u64, UserRole)| {
            if *busy {
                return;
            }
            let api_client = api_client.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            busy.set(true);

            spawn_local(async move {
                let result = api_client.change_role(user_id, role).await;
                if let Err(e) = &result {
                    Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to update user role: {}", e),
                    );
                }
                busy.set(false);
                apply(outcome::change_role(&result), &error, &refresh);
            });
        })
    };

    let delete_user = {
        let api_client = api_client.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |user_id: u64| {
            if *busy {
                return;
            }
            let api_client = api_client.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            busy.set(true);

            spawn_local(async move {
                let result = api_client.delete_user(user_id).await;
                if let Err(e) = &result {
                    Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to delete user: {}", e),
                    );
                }
                busy.set(false);
                apply(outcome::delete_user(&result), &error, &refresh);
            });
        })
    };

    UseUsersResult {
        state: UsersState {
            users: (*users).clone(),
            loading: *loading,
            busy: *busy,
            error: (*error).clone(),
        },
        actions: UseUsersActions {
            refresh,
            change_role,
            delete_user,
        },
    }
}
