use shared::BookForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_books::BookField;

#[derive(Properties, PartialEq)]
pub struct BookFormProps {
    pub form: BookForm,
    pub busy: bool,
    pub on_input: Callback<(BookField, String)>,
    pub on_create: Callback<()>,
    pub on_update: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_search: Callback<()>,
    pub on_view_all: Callback<()>,
}

fn field_input(field: BookField, on_input: &Callback<(BookField, String)>) -> Callback<InputEvent> {
    let on_input = on_input.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit((field, input.value()));
    })
}

fn button(label: &'static str, id: &'static str, busy: bool, action: &Callback<()>) -> Html {
    let action = action.clone();
    html! {
        <button
            type="button"
            id={id}
            class="btn"
            disabled={busy}
            onclick={Callback::from(move |_: MouseEvent| action.emit(()))}
        >
            {label}
        </button>
    }
}

/// Book id and fields shared by create, update, delete and search. Delete
/// and search only read the id.
#[function_component(BookFormPanel)]
pub fn book_form_panel(props: &BookFormProps) -> Html {
    html! {
        <section class="book-form-section">
            <h2>{"Manage Books"}</h2>
            <div class="form-row">
                <div class="form-group">
                    <label for="book-id">{"Book ID"}</label>
                    <input
                        type="text"
                        id="book-id"
                        placeholder="Needed for update, delete and search"
                        value={props.form.id.clone()}
                        oninput={field_input(BookField::Id, &props.on_input)}
                    />
                </div>
                <div class="form-group">
                    <label for="book-title">{"Title"}</label>
                    <input
                        type="text"
                        id="book-title"
                        value={props.form.title.clone()}
                        oninput={field_input(BookField::Title, &props.on_input)}
                    />
                </div>
                <div class="form-group">
                    <label for="book-author">{"Author"}</label>
                    <input
                        type="text"
                        id="book-author"
                        value={props.form.author.clone()}
                        oninput={field_input(BookField::Author, &props.on_input)}
                    />
                </div>
                <div class="form-group">
                    <label for="book-published">{"Published"}</label>
                    <input
                        type="text"
                        id="book-published"
                        placeholder="YYYY-MM-DD"
                        value={props.form.published.clone()}
                        oninput={field_input(BookField::Published, &props.on_input)}
                    />
                </div>
            </div>
            <div class="button-row">
                {button("Add a New Book", "create-book-btn", props.busy, &props.on_create)}
                {button("Update Book", "update-book-btn", props.busy, &props.on_update)}
                {button("Delete Book", "delete-book-btn", props.busy, &props.on_delete)}
                {button("Search Book", "search-book-btn", props.busy, &props.on_search)}
                {button("View All Books", "read-books-btn", false, &props.on_view_all)}
            </div>
        </section>
    }
}
