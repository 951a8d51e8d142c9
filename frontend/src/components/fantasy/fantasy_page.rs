use yew::prelude::*;

use super::book_card::BookCard;
use super::carousel::FeaturedCarousel;
use crate::config::AppConfig;
use crate::hooks::use_fantasy::use_fantasy;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct FantasyPageProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
}

#[function_component(FantasyPage)]
pub fn fantasy_page(props: &FantasyPageProps) -> Html {
    let fantasy = use_fantasy(&props.api_client);
    let state = fantasy.state;

    let featured: Vec<_> = state
        .books
        .iter()
        .take(props.config.carousel_size)
        .cloned()
        .collect();

    html! {
        <div class="fantasy-page">
            <FeaturedCarousel items={featured} autoplay_ms={props.config.carousel_autoplay_ms} />

            <div id="fantasy-books-container" class="cards">
                if state.loading {
                    <div class="loading">{"Loading fantasy books..."}</div>
                } else if let Some(error) = state.load_error.as_ref() {
                    <p>{error}</p>
                } else {
                    {for state.books.iter().map(|book| html! {
                        <BookCard
                            key={book.id}
                            book={book.clone()}
                            buying={state.buying == Some(book.id)}
                            on_buy={fantasy.actions.buy.clone()}
                        />
                    })}
                }
            </div>
        </div>
    }
}
