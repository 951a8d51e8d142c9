use yew::prelude::*;

use super::account_menu::AccountMenu;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        let class = if props.current == page { "nav-link active" } else { "nav-link" };
        html! {
            <a href="#" {class} {onclick}>{page.title()}</a>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Bookstore"}</h1>
                <nav class="header-right">
                    {link(Page::Books)}
                    {link(Page::Fantasy)}
                    {link(Page::Contact)}
                    <AccountMenu on_navigate={props.on_navigate.clone()} />
                </nav>
            </div>
        </header>
    }
}
