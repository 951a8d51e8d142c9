//! Maps the result of each resource call to what the user sees next.

use crate::error::ApiError;
use crate::{Book, MessageResponse, StatusResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "notification success",
            Tone::Error => "notification error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Blocking browser alert
    Alert(String),
    /// Text for the error region of the page that issued the call
    Error(String),
    /// Colored status line that hides itself after a delay
    Notice { text: String, tone: Tone },
    /// Persistent status text under a form
    Status(String),
}

/// What a finished call changes on screen. `refresh` asks the owning list to
/// reload; it is never set on failure so the previous rows stay in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub feedback: Option<Feedback>,
    pub refresh: bool,
}

impl Outcome {
    fn refresh_with(feedback: Feedback) -> Self {
        Self {
            feedback: Some(feedback),
            refresh: true,
        }
    }

    fn only(feedback: Feedback) -> Self {
        Self {
            feedback: Some(feedback),
            refresh: false,
        }
    }
}

fn message_or<'a>(err: &'a ApiError, fallback: &'a str) -> &'a str {
    err.server_message().unwrap_or(fallback)
}

pub fn add_book(result: &Result<(), ApiError>) -> Outcome {
    match result {
        Ok(()) => Outcome::refresh_with(Feedback::Alert("Book added successfully!".to_string())),
        Err(ApiError::Validation(err)) => Outcome::only(Feedback::Error(err.to_string())),
        Err(err) if err.is_unexpected() => Outcome::only(Feedback::Error(
            "An unexpected error occurred while adding the book.".to_string(),
        )),
        Err(err) => Outcome::only(Feedback::Error(format!(
            "Failed to add the book: {}",
            message_or(err, "Unknown error")
        ))),
    }
}

pub fn update_book(result: &Result<(), ApiError>) -> Outcome {
    match result {
        Ok(()) => Outcome::refresh_with(Feedback::Alert("Book updated successfully!".to_string())),
        Err(ApiError::Validation(err)) => Outcome::only(Feedback::Alert(err.to_string())),
        Err(err) if err.is_unexpected() => Outcome::only(Feedback::Alert(
            "An unexpected error occurred while updating the book.".to_string(),
        )),
        Err(err) => Outcome::only(Feedback::Alert(format!(
            "Failed to update the book: {}",
            message_or(err, "Unknown error")
        ))),
    }
}

pub fn delete_book(result: &Result<(), ApiError>) -> Outcome {
    match result {
        Ok(()) => Outcome::refresh_with(Feedback::Alert("Book deleted successfully!".to_string())),
        Err(ApiError::Validation(err)) => Outcome::only(Feedback::Alert(err.to_string())),
        Err(err) if err.is_unexpected() => Outcome::only(Feedback::Alert(
            "An unexpected error occurred while deleting the book.".to_string(),
        )),
        Err(_) => Outcome::only(Feedback::Alert("Failed to delete the book.".to_string())),
    }
}

pub fn search_book(result: &Result<Book, ApiError>) -> Outcome {
    match result {
        Ok(book) => Outcome::only(Feedback::Alert(format!(
            "Book found: \nTitle: {}\nAuthor: {}\nPublished: {}",
            book.title, book.author, book.published
        ))),
        Err(ApiError::Validation(err)) => Outcome::only(Feedback::Alert(err.to_string())),
        Err(err) if err.is_unexpected() => Outcome::only(Feedback::Alert(
            "An unexpected error occurred while searching for the book.".to_string(),
        )),
        Err(_) => Outcome::only(Feedback::Alert("Book not found.".to_string())),
    }
}

/// Failure text for the books table; success is handled by redrawing it
/// Text for the error region above the books table. A successful load
/// clears it; a failed one leaves the old rows in place.
pub fn list_books(result: &Result<Vec<Book>, ApiError>) -> Option<String> {
    let err = result.as_ref().err()?;
    let text = if err.is_unexpected() {
        "An unexpected error occurred while loading books."
    } else {
        message_or(err, "Failed to load books.")
    };
    Some(text.to_string())
}

pub const FANTASY_LOAD_FAILED: &str = "Failed to load fantasy books. Please try again later.";

pub fn purchase(result: &Result<MessageResponse, ApiError>) -> Outcome {
    match result {
        Ok(response) if response.message.is_empty() => Outcome::only(Feedback::Alert(
            "Purchase completed successfully!".to_string(),
        )),
        Ok(response) => Outcome::only(Feedback::Alert(response.message.clone())),
        Err(err) if err.is_unexpected() => Outcome::only(Feedback::Alert(
            "An unexpected error occurred while purchasing the book.".to_string(),
        )),
        Err(err) => Outcome::only(Feedback::Alert(format!(
            "Failed to purchase the book: {}",
            message_or(err, "Unknown error")
        ))),
    }
}

/// `refresh` here means "reset the form"
pub fn send_message(result: &Result<StatusResponse, ApiError>) -> Outcome {
    let error = |text: String| {
        Outcome::only(Feedback::Notice {
            text,
            tone: Tone::Error,
        })
    };

    match result {
        Ok(response) => Outcome::refresh_with(Feedback::Notice {
            text: response.status.clone(),
            tone: Tone::Success,
        }),
        Err(ApiError::Validation(err)) => error(err.to_string()),
        Err(err) if err.is_unexpected() => {
            error("An unexpected error occurred while sending the message.".to_string())
        }
        Err(err) => error(format!(
            "Failed to send message: {}",
            message_or(err, "Unknown error")
        )),
    }
}

/// Validation problems pop an alert; everything else lands in the status line
pub fn register(result: &Result<MessageResponse, ApiError>) -> Outcome {
    match result {
        Ok(response) => Outcome::only(Feedback::Status(response.message.clone())),
        Err(ApiError::Validation(err)) => Outcome::only(Feedback::Alert(err.to_string())),
        Err(err) if err.is_unexpected() => Outcome::only(Feedback::Status(
            "An unexpected error occurred during registration.".to_string(),
        )),
        Err(err) => Outcome::only(Feedback::Status(
            message_or(err, "Registration failed").to_string(),
        )),
    }
}

pub fn change_role(result: &Result<MessageResponse, ApiError>) -> Outcome {
    match result {
        Ok(response) => Outcome::refresh_with(Feedback::Alert(response.message.clone())),
        Err(_) => Outcome::only(Feedback::Alert("Failed to update user role".to_string())),
    }
}

pub fn delete_user(result: &Result<MessageResponse, ApiError>) -> Outcome {
    match result {
        Ok(response) => Outcome::refresh_with(Feedback::Alert(response.message.clone())),
        Err(_) => Outcome::only(Feedback::Alert("Failed to delete user".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::forms::BookForm;

    fn http(status: u16, body: &str) -> ApiError {
        ApiError::from_response(status, body)
    }

    #[test]
    fn test_delete_failure_alerts_without_refresh() {
        let outcome = delete_book(&Err(http(500, "database is locked")));
        assert_eq!(
            outcome,
            Outcome {
                feedback: Some(Feedback::Alert("Failed to delete the book.".to_string())),
                refresh: false,
            }
        );
    }

    #[test]
    fn test_delete_success_refreshes() {
        let outcome = delete_book(&Ok(()));
        assert!(outcome.refresh);
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Alert("Book deleted successfully!".to_string()))
        );
    }

    #[test]
    fn test_add_book_reports_json_error() {
        let outcome = add_book(&Err(http(400, r#"{"error":"Missing required fields"}"#)));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Error(
                "Failed to add the book: Missing required fields".to_string()
            ))
        );
        assert!(!outcome.refresh);
    }

    #[test]
    fn test_add_book_reports_plain_text_error() {
        let outcome = add_book(&Err(http(409, "A book with this title already exists\n")));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Error(
                "Failed to add the book: A book with this title already exists".to_string()
            ))
        );
    }

    #[test]
    fn test_add_book_network_failure_is_generic() {
        let outcome = add_book(&Err(ApiError::Network("TypeError: Failed to fetch".to_string())));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Error(
                "An unexpected error occurred while adding the book.".to_string()
            ))
        );
    }

    #[test]
    fn test_add_book_validation_goes_to_error_region() {
        let err = ApiError::Validation(ValidationError::MissingFields("All fields are required!"));
        let outcome = add_book(&Err(err));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Error("All fields are required!".to_string()))
        );
    }

    #[test]
    fn test_update_failure_includes_body_text() {
        let outcome = update_book(&Err(http(500, "record not found")));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Alert("Failed to update the book: record not found".to_string()))
        );
    }

    #[test]
    fn test_search_found_and_missing() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published: "1965-08-01".to_string(),
            description: String::new(),
            price: 0.0,
            image_url: String::new(),
        };
        let found = search_book(&Ok(book));
        assert_eq!(
            found.feedback,
            Some(Feedback::Alert(
                "Book found: \nTitle: Dune\nAuthor: Herbert\nPublished: 1965-08-01".to_string()
            ))
        );

        let missing = search_book(&Err(http(404, "Book not found")));
        assert_eq!(missing.feedback, Some(Feedback::Alert("Book not found.".to_string())));
    }

    #[test]
    fn test_list_books_error_uses_server_text() {
        let message = list_books(&Err(http(404, "No books match the filter criteria")));
        assert_eq!(message.as_deref(), Some("No books match the filter criteria"));
    }

    #[test]
    fn test_successful_list_clears_previous_error() {
        let failed = list_books(&Err(http(404, "No books match the filter criteria")));
        assert!(failed.is_some());

        let reloaded = list_books(&Ok(vec![]));
        assert_eq!(reloaded, None);
    }

    #[test]
    fn test_update_with_non_numeric_id_asks_for_all_fields() {
        let form = BookForm {
            id: "12abc".to_string(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published: "1965-08-01".to_string(),
        };
        let result = form.book_update().map(|_| ()).map_err(ApiError::from);

        let outcome = update_book(&result);
        assert_eq!(
            outcome,
            Outcome {
                feedback: Some(Feedback::Alert("All fields are required!".to_string())),
                refresh: false,
            }
        );
    }

    #[test]
    fn test_send_message_notices() {
        let ok = send_message(&Ok(StatusResponse {
            status: "Message sent successfully".to_string(),
        }));
        assert!(ok.refresh);
        assert_eq!(
            ok.feedback,
            Some(Feedback::Notice {
                text: "Message sent successfully".to_string(),
                tone: Tone::Success,
            })
        );

        let failed = send_message(&Err(http(500, "Failed to send email")));
        assert_eq!(
            failed.feedback,
            Some(Feedback::Notice {
                text: "Failed to send message: Failed to send email".to_string(),
                tone: Tone::Error,
            })
        );
        assert!(!failed.refresh);
    }

    #[test]
    fn test_purchase_fallback_message() {
        let outcome = purchase(&Ok(MessageResponse {
            message: String::new(),
        }));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Alert("Purchase completed successfully!".to_string()))
        );
    }

    #[test]
    fn test_register_mismatch_alerts() {
        let outcome = register(&Err(ValidationError::PasswordMismatch.into()));
        assert_eq!(
            outcome.feedback,
            Some(Feedback::Alert("Passwords do not match".to_string()))
        );

        let taken = register(&Err(http(409, r#"{"message":"Email already registered"}"#)));
        assert_eq!(
            taken.feedback,
            Some(Feedback::Status("Email already registered".to_string()))
        );
    }

    #[test]
    fn test_user_admin_outcomes() {
        let ok = change_role(&Ok(MessageResponse {
            message: "User role updated successfully".to_string(),
        }));
        assert!(ok.refresh);

        let failed = delete_user(&Err(http(403, "Forbidden")));
        assert!(!failed.refresh);
        assert_eq!(
            failed.feedback,
            Some(Feedback::Alert("Failed to delete user".to_string()))
        );
    }
}
