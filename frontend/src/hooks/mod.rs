pub mod use_books;
pub mod use_carousel;
pub mod use_dropdown;
pub mod use_fantasy;
pub mod use_notification;
pub mod use_users;
