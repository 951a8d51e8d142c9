use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::forms::BookFilter;
use crate::{ChangeRoleRequest, NewBookRequest, PurchaseRequest, RegisterRequest, UpdateBookRequest};

/// Header carrying the client-asserted role on admin calls
pub const ROLE_HEADER: &str = "Role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Everything needed to issue one request, independent of the browser.
/// Paths are relative to the configured API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub role: Option<String>,
}

impl RequestSpec {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            role: None,
        }
    }

    fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// `METHOD /path?query` for log lines
    pub fn describe(&self) -> String {
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        if query.is_empty() {
            format!("{} {}", self.method.as_str(), self.path)
        } else {
            format!("{} {}?{}", self.method.as_str(), self.path, query)
        }
    }

    pub fn list_books(filter: &BookFilter) -> Self {
        let mut spec = Self::new(Method::Get, "/books");
        spec.query = filter.query_pairs();
        spec
    }

    pub fn add_book(request: &NewBookRequest) -> Result<Self, ApiError> {
        Self::new(Method::Post, "/books/add").with_json(request)
    }

    pub fn update_book(request: &UpdateBookRequest) -> Result<Self, ApiError> {
        Self::new(Method::Put, "/books/update").with_json(request)
    }

    pub fn delete_book(id: &str) -> Self {
        Self::new(Method::Delete, "/books/delete").with_query("id", id)
    }

    pub fn search_book(id: &str) -> Self {
        Self::new(Method::Get, "/books/search").with_query("id", id)
    }

    pub fn fantasy_books() -> Self {
        Self::new(Method::Get, "/fantasy/books")
    }

    pub fn purchase(book_id: u64) -> Result<Self, ApiError> {
        Self::new(Method::Post, "/buy").with_json(&PurchaseRequest { book_id })
    }

    pub fn register(request: &RegisterRequest) -> Result<Self, ApiError> {
        Self::new(Method::Post, "/register").with_json(request)
    }

    pub fn list_users(role: &str) -> Self {
        Self::new(Method::Get, "/admin/users").with_role(role)
    }

    pub fn change_role(request: &ChangeRoleRequest, role: &str) -> Result<Self, ApiError> {
        Ok(Self::new(Method::Post, "/admin/users/update-role")
            .with_json(request)?
            .with_role(role))
    }

    pub fn delete_user(user_id: u64, role: &str) -> Self {
        Self::new(Method::Delete, "/admin/users/delete")
            .with_query("id", user_id.to_string())
            .with_role(role)
    }
}
