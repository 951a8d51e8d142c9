use yew::prelude::*;

use super::book_form::BookFormPanel;
use super::books_table::BooksTable;
use super::filter_bar::FilterBar;
use crate::hooks::use_books::use_books;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct BooksPageProps {
    pub api_client: ApiClient,
}

#[function_component(BooksPage)]
pub fn books_page(props: &BooksPageProps) -> Html {
    let books = use_books(&props.api_client);
    let state = books.state;
    let actions = books.actions;

    {
        let refresh = actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    html! {
        <div class="books-page">
            <BookFormPanel
                form={state.form.clone()}
                busy={state.busy}
                on_input={actions.on_form_input.clone()}
                on_create={actions.create.clone()}
                on_update={actions.update.clone()}
                on_delete={actions.delete.clone()}
                on_search={actions.search.clone()}
                on_view_all={actions.refresh.clone()}
            />

            if let Some(error) = state.error.as_ref() {
                <div id="error-container" class="form-message error">{error}</div>
            }

            <FilterBar
                filter={state.filter.clone()}
                on_input={actions.on_filter_input.clone()}
                on_apply={actions.apply_filters.clone()}
            />

            <BooksTable books={state.books.clone()} loading={state.loading} />
        </div>
    }
}
