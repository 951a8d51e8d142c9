use shared::{outcome, ApiError, Book, BookFilter, BookForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::feedback::apply;
use crate::services::logging::Logger;

const COMPONENT: &str = "books";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BookField {
    Id,
    Title,
    Author,
    Published,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterField {
    Title,
    Author,
    Published,
    SortBy,
    SortOrder,
}

#[derive(Clone)]
pub struct BooksState {
    pub books: Vec<Book>,
    pub loading: bool,
    /// A create/update/delete/search call is in flight
    pub busy: bool,
    pub error: Option<String>,
    pub form: BookForm,
    pub filter: BookFilter,
}

pub struct UseBooksResult {
    pub state: BooksState,
    pub actions: UseBooksActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBooksActions {
    pub refresh: Callback<()>,
    pub apply_filters: Callback<()>,
    pub create: Callback<()>,
    pub update: Callback<()>,
    pub delete: Callback<()>,
    pub search: Callback<()>,
    pub on_form_input: Callback<(BookField, String)>,
    pub on_filter_input: Callback<(FilterField, String)>,
}

#[hook]
pub fn use_books(api_client: &ApiClient) -> UseBooksResult {
    let books = use_state(Vec::<Book>::new);
    let loading = use_state(|| false);
    let busy = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let form = use_state(BookForm::default);
    let filter = use_state(BookFilter::default);

    // Full redraw from whatever the server returns; on failure the old rows stay
    let load = {
        let api_client = api_client.clone();
        let books = books.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |filter: BookFilter| {
            let api_client = api_client.clone();
            let books = books.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                let result = api_client.list_books(&filter).await;
                error.set(outcome::list_books(&result));

                match result {
                    Ok(data) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("loaded {} books", data.len()),
                        );
                        books.set(data);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to fetch books: {}", e),
                        );
                    }
                }

                loading.set(false);
            });
        })
    };

    let refresh = {
        let load = load.clone();
        Callback::from(move |_| load.emit(BookFilter::default()))
    };

    let apply_filters = {
        let load = load.clone();
        let filter = filter.clone();
        let error = error.clone();
        Callback::from(move |_| {
            error.set(None);
            load.emit((*filter).clone());
        })
    };

    let create = {
        let api_client = api_client.clone();
        let form = form.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            if *busy {
                return;
            }
            error.set(None);

            let request = match form.new_book() {
                Ok(request) => request,
                Err(e) => {
                    apply(outcome::add_book(&Err(e.into())), &error, &refresh);
                    return;
                }
            };

            let api_client = api_client.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            busy.set(true);

            spawn_local(async move {
                let result = api_client.add_book(&request).await;
                if let Err(e) = &result {
                    Logger::error_with_component(COMPONENT, &format!("Error adding book: {}", e));
                }
                busy.set(false);
                apply(outcome::add_book(&result), &error, &refresh);
            });
        })
    };

    let update = {
        let api_client = api_client.clone();
        let form = form.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            if *busy {
                return;
            }

            let request = match form.book_update() {
                Ok(request) => request,
                Err(e) => {
                    apply(outcome::update_book(&Err(e.into())), &error, &refresh);
                    return;
                }
            };

            let api_client = api_client.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            busy.set(true);

            spawn_local(async move {
                let result = api_client.update_book(&request).await;
                if let Err(e) = &result {
                    Logger::error_with_component(COMPONENT, &format!("Error updating book: {}", e));
                }
                busy.set(false);
                apply(outcome::update_book(&result), &error, &refresh);
            });
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let form = form.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            if *busy {
                return;
            }

            let id = match form.delete_id() {
                Ok(id) => id,
                Err(e) => {
                    apply(outcome::delete_book(&Err(e.into())), &error, &refresh);
                    return;
                }
            };

            let api_client = api_client.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            busy.set(true);

            spawn_local(async move {
                let result = api_client.delete_book(&id).await;
                if let Err(e) = &result {
                    Logger::error_with_component(COMPONENT, &format!("Error deleting book: {}", e));
                }
                busy.set(false);
                apply(outcome::delete_book(&result), &error, &refresh);
            });
        })
    };

    let search = {
        let api_client = api_client.clone();
        let form = form.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            if *busy {
                return;
            }

            let id = match form.search_id() {
                Ok(id) => id,
                Err(e) => {
                    apply(outcome::search_book(&Err(e.into())), &error, &refresh);
                    return;
                }
            };

            let api_client = api_client.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            busy.set(true);

            spawn_local(async move {
                let result: Result<Book, ApiError> = api_client.search_book(&id).await;
                if let Err(e) = &result {
                    Logger::error_with_component(
                        COMPONENT,
                        &format!("Error searching for book: {}", e),
                    );
                }
                busy.set(false);
                apply(outcome::search_book(&result), &error, &refresh);
            });
        })
    };

    let on_form_input = {
        let form = form.clone();
        Callback::from(move |(field, value): (BookField, String)| {
            let mut next = (*form).clone();
            match field {
                BookField::Id => next.id = value,
                BookField::Title => next.title = value,
                BookField::Author => next.author = value,
                BookField::Published => next.published = value,
            }
            form.set(next);
        })
    };

    let on_filter_input = {
        let filter = filter.clone();
        Callback::from(move |(field, value): (FilterField, String)| {
            let mut next = (*filter).clone();
            match field {
                FilterField::Title => next.title = value,
                FilterField::Author => next.author = value,
                FilterField::Published => next.published = value,
                FilterField::SortBy => next.sort_by = value,
                FilterField::SortOrder => next.sort_order = value,
            }
            filter.set(next);
        })
    };

    UseBooksResult {
        state: BooksState {
            books: (*books).clone(),
            loading: *loading,
            busy: *busy,
            error: (*error).clone(),
            form: (*form).clone(),
            filter: (*filter).clone(),
        },
        actions: UseBooksActions {
            refresh,
            apply_filters,
            create,
            update,
            delete,
            search,
            on_form_input,
            on_filter_input,
        },
    }
}
