pub mod account_menu;
pub mod books;
pub mod contact_form;
pub mod fantasy;
pub mod header;
pub mod notification;
pub mod register_form;
pub mod users_page;
