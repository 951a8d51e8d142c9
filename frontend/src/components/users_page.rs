use shared::render::user_row;
use shared::UserRole;
use yew::prelude::*;

use crate::hooks::use_users::use_users;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct UsersPageProps {
    pub api_client: ApiClient,
}

/// Admin view of all accounts. Calls carry the configured role header; the
/// server decides whether they are allowed.
#[function_component(UsersPage)]
pub fn users_page(props: &UsersPageProps) -> Html {
    let users = use_users(&props.api_client);
    let state = users.state;
    let actions = users.actions;

    html! {
        <section class="users-section">
            <h2>{"Users"}</h2>
            if let Some(error) = state.error.as_ref() {
                <div class="form-message error">{error}</div>
            }
            <table id="users-table" class="users-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Email"}</th>
                        <th>{"Role"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for state.users.iter().map(|user| {
                        let id = user.id;
                        let make_admin = {
                            let change_role = actions.change_role.clone();
                            Callback::from(move |_: MouseEvent| change_role.emit((id, UserRole::Admin)))
                        };
                        let make_user = {
                            let change_role = actions.change_role.clone();
                            Callback::from(move |_: MouseEvent| change_role.emit((id, UserRole::User)))
                        };
                        let delete = {
                            let delete_user = actions.delete_user.clone();
                            Callback::from(move |_: MouseEvent| delete_user.emit(id))
                        };

                        html! {
                            <tr key={id}>
                                {for user_row(user).into_iter().map(|cell| html! { <td>{cell}</td> })}
                                <td>
                                    <button onclick={make_admin} disabled={state.busy}>{"Make Admin"}</button>
                                    <button onclick={make_user} disabled={state.busy}>{"Make User"}</button>
                                    <button onclick={delete} disabled={state.busy}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            if state.loading {
                <div class="loading">{"Loading users..."}</div>
            }
        </section>
    }
}
