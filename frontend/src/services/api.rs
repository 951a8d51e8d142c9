use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::forms::change_role_request;
use shared::request::ROLE_HEADER;
use shared::{
    ApiError, Book, BookFilter, FantasyBook, MessageForm, MessageResponse, Method, NewBookRequest,
    RegisterRequest, RequestSpec, StatusResponse, UpdateBookRequest, User, UserRole,
};
use web_sys::{FormData, HtmlFormElement};

use crate::config::AppConfig;
use crate::services::logging::Logger;

const COMPONENT: &str = "api";
const DEFAULT_MESSAGE_PATH: &str = "/send-message";

/// API client for the bookstore backend. Every call is a single attempt
/// with no timeout; failures come back as a tagged `ApiError`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    admin_role: String,
}

impl ApiClient {
    /// Create a client from the default configuration
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            admin_role: config.admin_role.clone(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            ..Self::new()
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn builder(&self, spec: &RequestSpec) -> RequestBuilder {
        let url = self.url(&spec.path);
        let mut builder = match spec.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if !spec.query.is_empty() {
            builder = builder.query(
                spec.query
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            );
        }
        if let Some(role) = &spec.role {
            builder = builder.header(ROLE_HEADER, role);
        }
        builder
    }

    /// Send one request and split the answer into success or `ApiError`
    async fn execute(&self, spec: RequestSpec) -> Result<Response, ApiError> {
        Logger::debug_with_component(COMPONENT, &spec.describe());

        let builder = self.builder(&spec);
        let request = match &spec.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            Logger::error_with_component(COMPONENT, &format!("{} failed: {}", spec.describe(), e));
            ApiError::Network(e.to_string())
        })?;

        Self::check_status(&spec.describe(), response).await
    }

    async fn check_status(label: &str, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Logger::warn_with_component(
            COMPONENT,
            &format!("{} returned {}: {}", label, status, body.trim()),
        );
        Err(ApiError::from_response(status, &body))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ApiError> {
        let response = self.execute(spec).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// For endpoints whose success body is irrelevant (or empty, like 204)
    async fn fetch_unit(&self, spec: RequestSpec) -> Result<(), ApiError> {
        self.execute(spec).await.map(|_| ())
    }

    pub async fn list_books(&self, filter: &BookFilter) -> Result<Vec<Book>, ApiError> {
        self.fetch_json(RequestSpec::list_books(filter)).await
    }

    pub async fn add_book(&self, request: &NewBookRequest) -> Result<(), ApiError> {
        self.fetch_unit(RequestSpec::add_book(request)?).await
    }

    pub async fn update_book(&self, request: &UpdateBookRequest) -> Result<(), ApiError> {
        self.fetch_unit(RequestSpec::update_book(request)?).await
    }

    pub async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.fetch_unit(RequestSpec::delete_book(id)).await
    }

    pub async fn search_book(&self, id: &str) -> Result<Book, ApiError> {
        self.fetch_json(RequestSpec::search_book(id)).await
    }

    pub async fn fantasy_books(&self) -> Result<Vec<FantasyBook>, ApiError> {
        self.fetch_json(RequestSpec::fantasy_books()).await
    }

    pub async fn purchase(&self, book_id: u64) -> Result<MessageResponse, ApiError> {
        self.fetch_json(RequestSpec::purchase(book_id)?).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.fetch_json(RequestSpec::register(request)?).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_json(RequestSpec::list_users(&self.admin_role)).await
    }

    pub async fn change_role(
        &self,
        user_id: u64,
        role: UserRole,
    ) -> Result<MessageResponse, ApiError> {
        let request = change_role_request(user_id, role);
        self.fetch_json(RequestSpec::change_role(&request, &self.admin_role)?).await
    }

    pub async fn delete_user(&self, user_id: u64) -> Result<MessageResponse, ApiError> {
        self.fetch_json(RequestSpec::delete_user(user_id, &self.admin_role)).await
    }

    /// Submit the contact form as multipart data to the form's own action
    /// and method, after checking its text fields.
    pub async fn send_message(&self, form: &HtmlFormElement) -> Result<StatusResponse, ApiError> {
        let form_data = FormData::new_with_form(form)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        message_fields(&form_data).validate()?;

        let url = match form.get_attribute("action") {
            Some(action) if action.starts_with("http") => action,
            Some(action) if !action.is_empty() => self.url(&action),
            _ => self.url(DEFAULT_MESSAGE_PATH),
        };
        let is_put = form
            .get_attribute("method")
            .is_some_and(|method| method.eq_ignore_ascii_case("put"));
        let (builder, label) = if is_put {
            (Request::put(&url), format!("PUT {}", url))
        } else {
            (Request::post(&url), format!("POST {}", url))
        };
        Logger::debug_with_component(COMPONENT, &label);

        let request = builder
            .body(form_data)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request.send().await.map_err(|e| {
            Logger::error_with_component(COMPONENT, &format!("{} failed: {}", label, e));
            ApiError::Network(e.to_string())
        })?;
        let response = Self::check_status(&label, response).await?;

        response
            .json::<StatusResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn message_fields(form_data: &FormData) -> MessageForm {
    let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();
    MessageForm {
        to: field("to"),
        subject: field("subject"),
        message: field("message"),
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
