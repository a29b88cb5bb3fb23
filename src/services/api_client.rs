// ============================================================================
// API CLIENT - HTTP only, no business logic
// ============================================================================
// The bearer token lives on the client value itself. Build a new client with
// `with_token` after login instead of mutating shared state.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Blog, BlogUpdate, Credentials, NewBlog, NewUser, SessionRecord, User, UserSummary};
use crate::utils::{BLOGS_PATH, LOGIN_PATH, TESTING_RESET_PATH, USERS_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_config()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.backend_url.clone())
    }

    /// Same client, authenticated with `token` on every subsequent call.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn blog_url(&self, id: &str) -> String {
        format!("{}/{}", self.url(BLOGS_PATH), id)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(request.send().await?)
    }

    /// Turns a non-2xx response into `ApiError::Http`, keeping the body so
    /// the server's `error` text can be shown.
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("❌ HTTP {}", status);
        Err(ApiError::Http { status, body })
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// `POST /api/login`. A 401 becomes [`ApiError::InvalidCredentials`].
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        log::info!("🔐 Logging in as {}", credentials.username);
        let response = Self::send_json(Request::post(&self.url(LOGIN_PATH)), credentials).await?;

        if response.status() == 401 {
            log::warn!("⚠️ Login rejected for {}", credentials.username);
            return Err(ApiError::InvalidCredentials);
        }

        let record: SessionRecord = Self::parse(response).await?;
        let user = record.into_user()?;
        log::info!("✅ Logged in: {} ({})", user.username, user.id);
        Ok(user)
    }

    /// `POST /api/users`. Used to seed accounts for end-to-end runs.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<UserSummary, ApiError> {
        log::info!("👤 Creating user {}", new_user.username);
        let response = Self::send_json(Request::post(&self.url(USERS_PATH)), new_user).await?;
        Self::parse(response).await
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        let response = self.authorize(Request::get(&self.url(BLOGS_PATH))).send().await?;
        let blogs: Vec<Blog> = Self::parse(response).await?;
        log::info!("📚 {} blogs loaded", blogs.len());
        Ok(blogs)
    }

    pub async fn create_blog(&self, new_blog: &NewBlog) -> Result<Blog, ApiError> {
        log::info!("📝 Creating blog {}", new_blog.title);
        let builder = self.authorize(Request::post(&self.url(BLOGS_PATH)));
        let response = Self::send_json(builder, new_blog).await?;
        Self::parse(response).await
    }

    pub async fn update_blog(&self, id: &str, update: &BlogUpdate) -> Result<Blog, ApiError> {
        log::info!("✏️ Updating blog {} (likes {})", id, update.likes);
        let builder = self.authorize(Request::put(&self.blog_url(id)));
        let response = Self::send_json(builder, update).await?;
        Self::parse(response).await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<(), ApiError> {
        log::info!("🗑️ Deleting blog {}", id);
        let response = self.authorize(Request::delete(&self.blog_url(id))).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST /api/testing/reset`. Only available when the backend runs in
    /// test mode.
    pub async fn reset_testing(&self) -> Result<(), ApiError> {
        log::warn!("🧹 Resetting backend test state");
        let response = Request::post(&self.url(TESTING_RESET_PATH)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_client_sends_no_authorization() {
        let client = ApiClient::new("http://localhost:3003");
        assert_eq!(client.token(), None);
        assert_eq!(client.authorization_header(), None);
    }

    #[test]
    fn token_becomes_bearer_header() {
        let client = ApiClient::new("").with_token("abc.def.ghi");
        assert_eq!(client.token(), Some("abc.def.ghi"));
        assert_eq!(client.authorization_header().as_deref(), Some("Bearer abc.def.ghi"));
    }

    #[test]
    fn with_token_leaves_source_client_untouched() {
        let anonymous = ApiClient::new("");
        let authed = anonymous.clone().with_token("t");
        assert_ne!(anonymous, authed);
        assert_eq!(anonymous.token(), None);
    }

    #[test]
    fn urls_are_joined_against_base() {
        let client = ApiClient::new("http://localhost:3003/");
        assert_eq!(client.url(LOGIN_PATH), "http://localhost:3003/api/login");
        assert_eq!(client.blog_url("b1"), "http://localhost:3003/api/blogs/b1");

        let same_origin = ApiClient::new("");
        assert_eq!(same_origin.blog_url("b1"), "/api/blogs/b1");
    }
}
