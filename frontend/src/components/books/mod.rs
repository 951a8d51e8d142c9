pub mod book_form;
pub mod books_page;
pub mod books_table;
pub mod filter_bar;
