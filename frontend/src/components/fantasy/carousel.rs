use shared::FantasyBook;
use yew::prelude::*;

use crate::hooks::use_carousel::{use_carousel, UseCarouselResult};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub items: Vec<FantasyBook>,
    #[prop_or_default]
    pub autoplay_ms: Option<u32>,
}

/// One slide visible at a time; prev/next wrap around the ends
#[function_component(FeaturedCarousel)]
pub fn featured_carousel(props: &CarouselProps) -> Html {
    let UseCarouselResult { carousel, next, prev } =
        use_carousel(props.items.len(), props.autoplay_ms);

    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <section class="carousel">
            <button class="carousel-control prev" onclick={prev}>{"‹"}</button>
            <div class="carousel-track">
                {for props.items.iter().enumerate().map(|(index, book)| {
                    let class = if carousel.is_active(index) {
                        "carousel-item active"
                    } else {
                        "carousel-item"
                    };
                    html! {
                        <div class={class} key={book.id}>
                            <img src={book.image_url.clone()} alt={book.title.clone()} />
                            <div class="carousel-caption">{&book.title}</div>
                        </div>
                    }
                })}
            </div>
            <button class="carousel-control next" onclick={next}>{"›"}</button>
        </section>
    }
}
