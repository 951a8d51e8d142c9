//! Structured form state and the presence checks run before dispatch.
//!
//! A field counts as missing only when it is the empty string; whitespace is
//! kept verbatim and sent as typed.

use crate::error::ValidationError;
use crate::{ChangeRoleRequest, NewBookRequest, RegisterRequest, UpdateBookRequest, UserRole};

const ALL_FIELDS_REQUIRED: &str = "All fields are required!";
const BOOK_ID_REQUIRED: &str = "Book ID is required!";
const ID_REQUIRED: &str = "ID is required!";
const MESSAGE_FIELDS_REQUIRED: &str = "Recipient, subject, and message are required";

fn present(values: &[&str]) -> bool {
    values.iter().all(|value| !value.is_empty())
}

/// Inputs of the book management panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published: String,
}

impl BookForm {
    pub fn new_book(&self) -> Result<NewBookRequest, ValidationError> {
        if !present(&[self.title.as_str(), self.author.as_str(), self.published.as_str()]) {
            return Err(ValidationError::MissingFields(ALL_FIELDS_REQUIRED));
        }

        Ok(NewBookRequest {
            title: self.title.clone(),
            author: self.author.clone(),
            published: self.published.clone(),
        })
    }

    /// The update body carries a numeric id, so the id must parse.
    pub fn book_update(&self) -> Result<UpdateBookRequest, ValidationError> {
        let fields = [
            self.id.as_str(),
            self.title.as_str(),
            self.author.as_str(),
            self.published.as_str(),
        ];
        if !present(&fields) {
            return Err(ValidationError::MissingFields(ALL_FIELDS_REQUIRED));
        }
        let id = self
            .id
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::MissingFields(ALL_FIELDS_REQUIRED))?;

        Ok(UpdateBookRequest {
            id,
            title: self.title.clone(),
            author: self.author.clone(),
            published: self.published.clone(),
        })
    }

    /// Id for `/books/delete`, passed through as typed
    pub fn delete_id(&self) -> Result<String, ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingFields(BOOK_ID_REQUIRED));
        }
        Ok(self.id.clone())
    }

    /// Id for `/books/search`, passed through as typed
    pub fn search_id(&self) -> Result<String, ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingFields(ID_REQUIRED));
        }
        Ok(self.id.clone())
    }
}

/// Filter bar above the books table. Empty values are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub title: String,
    pub author: String,
    pub published: String,
    pub sort_by: String,
    pub sort_order: String,
}

impl BookFilter {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("published", &self.published),
            ("sortBy", &self.sort_by),
            ("sortOrder", &self.sort_order),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
    }
}

/// Account creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn register_request(&self) -> Result<RegisterRequest, ValidationError> {
        if !present(&[self.name.as_str(), self.email.as_str(), self.password.as_str()]) {
            return Err(ValidationError::MissingFields(ALL_FIELDS_REQUIRED));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Text fields of the contact form. The attachment travels in the form data
/// untouched and is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageForm {
    pub to: String,
    pub subject: String,
    pub message: String,
}

impl MessageForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !present(&[self.to.as_str(), self.subject.as_str(), self.message.as_str()]) {
            return Err(ValidationError::MissingFields(MESSAGE_FIELDS_REQUIRED));
        }
        Ok(())
    }
}

pub fn change_role_request(user_id: u64, role: UserRole) -> ChangeRoleRequest {
    ChangeRoleRequest {
        user_id,
        role: role.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookForm {
        BookForm {
            id: "12".to_string(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published: "1965-08-01".to_string(),
        }
    }

    #[test]
    fn test_new_book_copies_fields_verbatim() {
        let mut form = filled_form();
        form.title = " Dune Messiah ".to_string();

        let request = form.new_book().unwrap();
        assert_eq!(request.title, " Dune Messiah ");
        assert_eq!(request.author, "Herbert");
        assert_eq!(request.published, "1965-08-01");
    }

    #[test]
    fn test_new_book_requires_every_field() {
        for field in 0..3 {
            let mut form = filled_form();
            match field {
                0 => form.title.clear(),
                1 => form.author.clear(),
                _ => form.published.clear(),
            }
            assert_eq!(
                form.new_book(),
                Err(ValidationError::MissingFields("All fields are required!"))
            );
        }
    }

    #[test]
    fn test_published_is_not_format_checked() {
        let mut form = filled_form();
        form.published = "sometime in the sixties".to_string();
        assert!(form.new_book().is_ok());
    }

    #[test]
    fn test_book_update_parses_id() {
        let request = filled_form().book_update().unwrap();
        assert_eq!(request.id, 12);
        assert_eq!(request.title, "Dune");
    }

    #[test]
    fn test_book_update_missing_id() {
        let mut form = filled_form();
        form.id.clear();
        assert_eq!(
            form.book_update(),
            Err(ValidationError::MissingFields("All fields are required!"))
        );
    }

    #[test]
    fn test_book_update_non_numeric_id() {
        let mut form = filled_form();
        form.id = "twelve".to_string();
        assert_eq!(
            form.book_update(),
            Err(ValidationError::MissingFields("All fields are required!"))
        );
    }

    #[test]
    fn test_delete_and_search_ids() {
        let form = filled_form();
        assert_eq!(form.delete_id().unwrap(), "12");
        assert_eq!(form.search_id().unwrap(), "12");

        let empty = BookForm::default();
        assert_eq!(
            empty.delete_id(),
            Err(ValidationError::MissingFields("Book ID is required!"))
        );
        assert_eq!(
            empty.search_id(),
            Err(ValidationError::MissingFields("ID is required!"))
        );
    }

    #[test]
    fn test_filter_skips_empty_values() {
        let filter = BookFilter {
            title: "Dune".to_string(),
            sort_by: "published".to_string(),
            sort_order: "desc".to_string(),
            ..Default::default()
        };

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("title".to_string(), "Dune".to_string()),
                ("sortBy".to_string(), "published".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
            ]
        );
        assert!(BookFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_registration_password_mismatch() {
        let form = RegistrationForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secrte".to_string(),
        };
        assert_eq!(form.register_request(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_registration_drops_confirmation() {
        let form = RegistrationForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        let request = form.register_request().unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"name": "Ann", "email": "ann@example.com", "password": "secret"})
        );
    }

    #[test]
    fn test_message_form_presence() {
        let mut form = MessageForm {
            to: "shop@example.com".to_string(),
            subject: "Order".to_string(),
            message: "Where is my book?".to_string(),
        };
        assert!(form.validate().is_ok());

        form.subject.clear();
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(
                "Recipient, subject, and message are required"
            ))
        );
    }

    #[test]
    fn test_change_role_request() {
        let request = change_role_request(4, UserRole::Admin);
        assert_eq!(request.user_id, 4);
        assert_eq!(request.role, "admin");
    }
}
