use yew::prelude::*;

use crate::hooks::use_dropdown::{use_dropdown, UseDropdownResult};
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct AccountMenuProps {
    pub on_navigate: Callback<Page>,
}

/// "Account" link that opens a floating menu under itself. The menu closes
/// on any click outside of it or after an entry is picked.
#[function_component(AccountMenu)]
pub fn account_menu(props: &AccountMenuProps) -> Html {
    let UseDropdownResult {
        menu,
        trigger_ref,
        menu_ref,
        on_trigger_click,
        close,
    } = use_dropdown();

    let style = menu
        .position()
        .map(|position| position.style())
        .unwrap_or_else(|| "display: none;".to_string());

    let item = |page: Page, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let close = close.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close.emit(());
            on_navigate.emit(page);
        });
        html! {
            <a href="#" class="account-menu-item" {onclick}>{label}</a>
        }
    };

    html! {
        <div class="account">
            <a href="#" class="account-toggle" ref={trigger_ref} onclick={on_trigger_click}>
                {"Account"}
            </a>
            <div class="account-menu" ref={menu_ref} {style}>
                {item(Page::Account, "Register")}
                {item(Page::Admin, "Manage users")}
            </div>
        </div>
    }
}
