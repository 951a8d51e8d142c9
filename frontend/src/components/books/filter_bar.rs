use shared::BookFilter;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_books::FilterField;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: BookFilter,
    pub on_input: Callback<(FilterField, String)>,
    pub on_apply: Callback<()>,
}

/// `(value, label)` pairs. The empty value leaves the key out of the query.
const SORT_BY_OPTIONS: [(&str, &str); 4] = [
    ("", "Sort by"),
    ("title", "Title"),
    ("author", "Author"),
    ("published", "Published"),
];
const SORT_ORDER_OPTIONS: [(&str, &str); 3] = [
    ("", "Order"),
    ("asc", "Ascending"),
    ("desc", "Descending"),
];

/// Value of the option shown as selected for `current`
fn selected_value(options: &[(&'static str, &'static str)], current: &str) -> &'static str {
    options
        .iter()
        .map(|(value, _)| *value)
        .find(|value| *value == current)
        .unwrap_or("")
}

fn options(choices: &[(&'static str, &'static str)], current: &str) -> Html {
    let selected = selected_value(choices, current);
    choices
        .iter()
        .map(|(value, label)| {
            html! { <option value={*value} selected={*value == selected}>{*label}</option> }
        })
        .collect()
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let text_input = |field: FilterField| {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };
    let select_change = |field: FilterField| {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit((field, select.value()));
        })
    };
    let on_apply = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(()))
    };

    html! {
        <section class="filters">
            <input
                type="text"
                id="filter-title"
                placeholder="Title"
                value={props.filter.title.clone()}
                oninput={text_input(FilterField::Title)}
            />
            <input
                type="text"
                id="filter-author"
                placeholder="Author"
                value={props.filter.author.clone()}
                oninput={text_input(FilterField::Author)}
            />
            <input
                type="text"
                id="filter-published"
                placeholder="Published"
                value={props.filter.published.clone()}
                oninput={text_input(FilterField::Published)}
            />
            <select id="sort-by" onchange={select_change(FilterField::SortBy)}>
                {options(&SORT_BY_OPTIONS, &props.filter.sort_by)}
            </select>
            <select id="sort-order" onchange={select_change(FilterField::SortOrder)}>
                {options(&SORT_ORDER_OPTIONS, &props.filter.sort_order)}
            </select>
            <button type="button" id="apply-filters" class="btn" onclick={on_apply}>
                {"Apply Filters"}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(filter: &BookFilter, key: &str) -> String {
        filter
            .query_pairs()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .unwrap_or_default()
    }

    #[test]
    fn test_shown_sort_order_matches_query() {
        for order in ["", "asc", "desc"] {
            let filter = BookFilter {
                sort_order: order.to_string(),
                ..BookFilter::default()
            };
            assert_eq!(
                selected_value(&SORT_ORDER_OPTIONS, &filter.sort_order),
                sent(&filter, "sortOrder")
            );
        }
    }

    #[test]
    fn test_default_filter_shows_empty_options() {
        let filter = BookFilter::default();
        assert_eq!(selected_value(&SORT_BY_OPTIONS, &filter.sort_by), "");
        assert_eq!(selected_value(&SORT_ORDER_OPTIONS, &filter.sort_order), "");
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn test_ascending_is_sent_once_picked() {
        let filter = BookFilter {
            sort_by: "title".to_string(),
            sort_order: "asc".to_string(),
            ..BookFilter::default()
        };
        assert_eq!(selected_value(&SORT_ORDER_OPTIONS, &filter.sort_order), "asc");
        assert_eq!(sent(&filter, "sortOrder"), "asc");
    }
}
