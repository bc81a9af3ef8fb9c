#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fakes {
    use crate::api::{ApiError, LoginData, LoginRequest, LoginResponse};
    use crate::pages::login::repository::LoginGateway;
    use crate::state::{
        navigation::{NavigationError, Navigator},
        session::SessionStore,
        toast::{Notifier, ToastLevel},
    };
    use crate::utils::storage::StorageError;
    use std::{cell::RefCell, rc::Rc};

    pub fn login_ok(token: &str, team_id: Option<&str>) -> Result<LoginResponse, ApiError> {
        Ok(LoginResponse {
            data: LoginData {
                token: token.into(),
                team_id: team_id.map(Into::into),
            },
        })
    }

    /// Records every request and answers with a fixed result.
    #[derive(Clone)]
    pub struct RecordingGateway {
        pub calls: Rc<RefCell<Vec<LoginRequest>>>,
        result: Result<LoginResponse, ApiError>,
    }

    impl RecordingGateway {
        pub fn answering(result: Result<LoginResponse, ApiError>) -> Self {
            Self {
                calls: Rc::default(),
                result,
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl LoginGateway for RecordingGateway {
        async fn submit_login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.calls.borrow_mut().push(request.clone());
            self.result.clone()
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        pub visits: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn visited(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) -> Result<(), NavigationError> {
            self.visits.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    /// Navigator whose every `set_href` is refused by the browser.
    #[derive(Clone, Copy, Default)]
    pub struct RefusingNavigator;

    impl Navigator for RefusingNavigator {
        fn navigate(&self, path: &str) -> Result<(), NavigationError> {
            Err(NavigationError::Refused(path.to_string()))
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub shown: Rc<RefCell<Vec<(ToastLevel, String)>>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.shown.borrow().iter().map(|(_, m)| m.clone()).collect()
        }

        pub fn levels(&self) -> Vec<ToastLevel> {
            self.shown.borrow().iter().map(|(l, _)| *l).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: ToastLevel, message: &str) {
            self.shown.borrow_mut().push((level, message.to_string()));
        }
    }

    /// Store whose writes are refused, like a full or disabled localStorage.
    #[derive(Clone, Copy, Default)]
    pub struct RejectingSessionStore;

    impl SessionStore for RejectingSessionStore {
        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::ClearFailed)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected { key: key.into() })
        }

        fn get(&self, _key: &str) -> Option<String> {
            None
        }
    }
}
