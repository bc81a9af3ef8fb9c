use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};

pub const LOGIN_ENDPOINT: &str = "/auth/login";

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_ENDPOINT, request).await
    }
}
