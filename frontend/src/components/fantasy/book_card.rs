use shared::render::card_price;
use shared::FantasyBook;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookCardProps {
    pub book: FantasyBook,
    pub buying: bool,
    pub on_buy: Callback<u64>,
}

#[function_component(BookCard)]
pub fn book_card(props: &BookCardProps) -> Html {
    let book = &props.book;
    let on_buy = {
        let on_buy = props.on_buy.clone();
        let id = book.id;
        Callback::from(move |_: MouseEvent| on_buy.emit(id))
    };

    html! {
        <div class="book-card">
            <img src={book.image_url.clone()} alt={book.title.clone()} class="book-image" />
            <h3 class="book-title">{&book.title}</h3>
            <p class="book-description">{&book.description}</p>
            <p class="book-price">{card_price(book.price)}</p>
            <button class="btn btn-primary buy-btn" onclick={on_buy} disabled={props.buying}>
                {if props.buying { "Buying..." } else { "Buy" }}
            </button>
        </div>
    }
}
