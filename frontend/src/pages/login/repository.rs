use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

/// Backend capability the login page needs.
#[allow(async_fn_in_trait)]
pub trait LoginGateway {
    async fn submit_login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }
}

impl LoginGateway for LoginRepository {
    async fn submit_login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }
}
