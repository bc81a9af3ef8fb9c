use super::{
    repository::{LoginGateway, LoginRepository},
    utils,
};
use crate::{
    api::{ApiClient, LoginData, LoginRequest, LoginResponse},
    router::{HOME_PATH, TEAM_PATH},
    state::{
        navigation::{LocationNavigator, Navigator},
        session::{use_session_store, SessionStore, TOKEN_KEY},
        toast::{use_toasts, Notifier},
    },
};
use leptos::*;
use std::rc::Rc;

pub const SUCCESS_MESSAGE: &str = "Login successful!";
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Where a submission currently stands.
///
/// A rejected validation goes straight back to `Idle`; a failed request does
/// too, with the form left as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Navigated(&'static str),
}

impl LoginPhase {
    /// Submit control is disabled in every phase but `Idle`.
    pub fn is_busy(&self) -> bool {
        !matches!(self, LoginPhase::Idle)
    }

    pub fn after(outcome: LoginOutcome) -> LoginPhase {
        match outcome {
            LoginOutcome::Navigated(target) => LoginPhase::Navigated(target),
            LoginOutcome::Invalid | LoginOutcome::Failed => LoginPhase::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Invalid,
    Navigated(&'static str),
    Failed,
}

pub fn destination(data: &LoginData) -> &'static str {
    if data.has_team() {
        HOME_PATH
    } else {
        TEAM_PATH
    }
}

/// Validation, submission and post-login side effects, independent of any
/// rendering.
pub struct LoginFlow<G> {
    gateway: G,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl<G: LoginGateway> LoginFlow<G> {
    pub fn new(
        gateway: G,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            session,
            navigator,
            notifier,
        }
    }

    /// Drops whatever a previous session left behind.
    pub fn reset_session(&self) {
        match self.session.clear() {
            Ok(()) => log::debug!("login page mounted, session store cleared"),
            Err(err) => log::warn!("login page mounted, session store not cleared: {}", err),
        }
    }

    /// Shows one notification per failing field; `true` when the request may
    /// be sent.
    pub fn validate(&self, request: &LoginRequest) -> bool {
        match utils::validate_credentials(request) {
            Ok(()) => true,
            Err(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                log::info!("login rejected by validation: {}", fields.join(", "));
                for error in &errors {
                    self.notifier.error(&error.message);
                }
                false
            }
        }
    }

    /// Sends already-validated credentials.
    pub async fn submit(&self, request: LoginRequest) -> LoginOutcome {
        log::debug!("submitting login request");
        match self.gateway.submit_login(&request).await {
            Ok(response) => self.complete(response),
            Err(_) => self.fail(),
        }
    }

    pub async fn attempt(&self, request: LoginRequest) -> LoginOutcome {
        if !self.validate(&request) {
            return LoginOutcome::Invalid;
        }
        self.submit(request).await
    }

    fn complete(&self, response: LoginResponse) -> LoginOutcome {
        self.notifier.success(SUCCESS_MESSAGE);
        if self.session.set(TOKEN_KEY, &response.data.token).is_err() {
            return self.fail();
        }
        let target = destination(&response.data);
        log::info!("login succeeded, navigating to {}", target);
        if let Err(err) = self.navigator.navigate(target) {
            log::error!("{}", err);
            return self.fail();
        }
        LoginOutcome::Navigated(target)
    }

    fn fail(&self) -> LoginOutcome {
        log::warn!("login attempt failed");
        self.notifier.error(FAILURE_MESSAGE);
        LoginOutcome::Failed
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn snapshot(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub phase: RwSignal<LoginPhase>,
    pub submit_action: Action<LoginRequest, LoginOutcome>,
    flow: Rc<LoginFlow<LoginRepository>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.phase.get_untracked().is_busy() {
            return;
        }
        self.phase.set(LoginPhase::Validating);
        let request = self.form.snapshot();
        if !self.flow.validate(&request) {
            self.phase.set(LoginPhase::after(LoginOutcome::Invalid));
            return;
        }
        self.phase.set(LoginPhase::Submitting);
        self.submit_action.dispatch(request);
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let flow = Rc::new(LoginFlow::new(
        repository,
        use_session_store(),
        Rc::new(LocationNavigator),
        Rc::new(use_toasts()),
    ));

    flow.reset_session();

    let form = LoginFormState::default();
    let phase = create_rw_signal(LoginPhase::Idle);

    let flow_for_submit = flow.clone();
    let submit_action = create_action(move |request: &LoginRequest| {
        let flow = flow_for_submit.clone();
        let request = request.clone();
        async move { flow.submit(request).await }
    });

    create_effect(move |_| {
        if let Some(outcome) = submit_action.value().get() {
            phase.set(LoginPhase::after(outcome));
        }
    });

    LoginViewModel {
        form,
        phase,
        submit_action,
        flow,
    }
}
