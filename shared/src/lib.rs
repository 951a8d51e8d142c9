use serde::{Deserialize, Serialize};

pub mod error;
pub mod forms;
pub mod outcome;
pub mod render;
pub mod request;
pub mod widgets;

pub use error::{ApiError, ValidationError};
pub use forms::{BookFilter, BookForm, MessageForm, RegistrationForm};
pub use outcome::{Feedback, Outcome, Tone};
pub use request::{Method, RequestSpec};
pub use widgets::{Carousel, ClickTarget, DropdownMenu, MenuPosition, TriggerRect};

/// A book as returned by the `/books` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// Free-form publication date, usually YYYY-MM-DD
    pub published: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

/// Entry of the fantasy catalog (`/fantasy/books`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FantasyBook {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

/// Account as listed by the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Role values the admin panel can assign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookRequest {
    pub title: String,
    pub author: String,
    pub published: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub published: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub book_id: u64,
}

/// Body of `/register`; the confirmation field never leaves the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    pub user_id: u64,
    pub role: String,
}

/// `{"message": ...}` envelope used by most mutation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `{"status": ...}` envelope returned by the message endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_without_optional_fields() {
        let json = r#"[{"id":1,"title":"Dune","author":"Herbert","published":"1965-08-01"}]"#;
        let books: Vec<Book> = serde_json::from_str(json).unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].price, 0.0);
        assert!(books[0].image_url.is_empty());
    }

    #[test]
    fn test_fantasy_book_ignores_unknown_fields() {
        let json = r#"{"id":3,"title":"Elantris","description":"A city of gods","price":12.5,"image_url":"/img/e.jpg","stock":4}"#;
        let book: FantasyBook = serde_json::from_str(json).unwrap();

        assert_eq!(book.id, 3);
        assert_eq!(book.price, 12.5);
        assert_eq!(book.image_url, "/img/e.jpg");
    }

    #[test]
    fn test_user_list_from_admin_endpoint() {
        let json = r#"[{"id":7,"name":"Ann","email":"ann@example.com","role":"admin","confirmed":true}]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();

        assert_eq!(users[0].email, "ann@example.com");
        assert_eq!(users[0].role, "admin");
    }

    #[test]
    fn test_user_role_wire_values() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::User.as_str(), "user");
    }
}
