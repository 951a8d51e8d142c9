pub mod book_card;
pub mod carousel;
pub mod fantasy_page;
