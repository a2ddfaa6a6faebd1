//! Session store: who is logged in, held in a context so any view can read
//! it, persisted to local storage so a reload keeps the session.
//!
//! Storage is only a cache. If anything about the persisted pair fails to
//! parse at startup the credentials are cleared and the app starts logged
//! out rather than half-authenticated.

use std::rc::Rc;

use hfpv_shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::storage;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session; also the landing state after any auth failure.
    LoggedOut,
    /// An auth call is in flight.
    Loading,
    /// A user and token are present.
    LoggedIn,
}

/// Session state shared through [`AuthProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// Current phase.
    pub phase: SessionPhase,
    /// The authenticated user, when logged in.
    pub user: Option<User>,
    /// Bearer token, when logged in.
    pub token: Option<String>,
    /// Last auth error, kept for the login form to display.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState { phase: SessionPhase::LoggedOut, user: None, token: None, error: None }
    }
}

impl AuthState {
    /// Whether a user session is present.
    pub fn is_logged_in(&self) -> bool {
        self.phase == SessionPhase::LoggedIn && self.user.is_some()
    }

    /// Build the startup state from whatever storage holds.
    fn restore() -> AuthState {
        match restore_session(storage::auth_token(), storage::cached_user_json()) {
            Some((token, user)) => AuthState {
                phase: SessionPhase::LoggedIn,
                user: Some(user),
                token: Some(token),
                error: None,
            },
            None => {
                // Partial or corrupted credentials must not survive.
                storage::clear_credentials();
                AuthState::default()
            },
        }
    }
}

/// Parse a persisted token/user pair. Any missing or unparsable piece
/// invalidates the whole session.
pub fn restore_session(token: Option<String>, user_json: Option<String>) -> Option<(String, User)> {
    let token = token?.trim().to_string();
    if token.is_empty() {
        return None;
    }
    let user: User = serde_json::from_str(&user_json?).ok()?;
    Some((token, user))
}

/// Session transitions.
pub enum AuthAction {
    /// An auth call started.
    Begin,
    /// Login / registration / social login succeeded.
    Authenticated {
        /// The now-current user.
        user: User,
        /// Bearer token for subsequent requests.
        token: String,
    },
    /// An auth call failed; message is shown by the login form.
    Failed(String),
    /// Profile update succeeded.
    UserRefreshed(User),
    /// Session ended.
    LoggedOut,
    /// Dismiss the retained error message.
    ClearError,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::Begin => {
                next.phase = SessionPhase::Loading;
                next.error = None;
            },
            AuthAction::Authenticated { user, token } => {
                next.phase = SessionPhase::LoggedIn;
                next.user = Some(user);
                next.token = Some(token);
                next.error = None;
            },
            AuthAction::Failed(message) => {
                next = AuthState::default();
                next.error = Some(message);
            },
            AuthAction::UserRefreshed(user) => {
                next.user = Some(user);
            },
            AuthAction::LoggedOut => {
                next = AuthState::default();
            },
            AuthAction::ClearError => {
                next.error = None;
            },
        }
        Rc::new(next)
    }
}

/// Handle passed through the context.
pub type AuthHandle = UseReducerHandle<AuthState>;

/// Persist and adopt a fresh session (login, registration, OAuth callback).
pub fn apply_session(auth: &AuthHandle, user: User, token: String) {
    storage::set_auth_token(&token);
    if let Ok(json) = serde_json::to_string(&user) {
        storage::set_cached_user_json(&json);
    }
    auth.dispatch(AuthAction::Authenticated { user, token });
}

/// Password login. Transitions through Loading; on failure the state drops
/// back to logged-out with the message retained.
pub fn login(auth: AuthHandle, email: String, password: String) {
    auth.dispatch(AuthAction::Begin);
    spawn_local(async move {
        match api::login(&email, &password).await {
            Ok(response) => apply_session(&auth, response.user, response.token),
            Err(message) => auth.dispatch(AuthAction::Failed(message)),
        }
    });
}

/// Account registration followed by session adoption.
pub fn register(auth: AuthHandle, email: String, password: String, first: String, last: String) {
    auth.dispatch(AuthAction::Begin);
    spawn_local(async move {
        match api::register(&email, &password, &first, &last).await {
            Ok(response) => apply_session(&auth, response.user, response.token),
            Err(message) => auth.dispatch(AuthAction::Failed(message)),
        }
    });
}

/// Update the profile names; the refreshed user replaces the cached one.
pub fn update_profile(auth: AuthHandle, update: api::ProfileUpdate, on_done: Callback<Result<(), String>>) {
    spawn_local(async move {
        match api::update_profile(&update).await {
            Ok(user) => {
                if let Ok(json) = serde_json::to_string(&user) {
                    storage::set_cached_user_json(&json);
                }
                auth.dispatch(AuthAction::UserRefreshed(user));
                on_done.emit(Ok(()));
            },
            Err(message) => on_done.emit(Err(message)),
        }
    });
}

/// End the session and drop the persisted credentials.
pub fn logout(auth: &AuthHandle) {
    storage::clear_credentials();
    auth.dispatch(AuthAction::LoggedOut);
}

/// Properties for [`AuthProvider`].
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    /// Subtree with access to the session context.
    #[prop_or_default]
    pub children: Children,
}

/// Mounts the session context, restoring any persisted session first.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(AuthState::restore);

    html! {
        <ContextProvider<AuthHandle> context={state}>
            { props.children.clone() }
        </ContextProvider<AuthHandle>>
    }
}

/// Convenience hook; panics outside [`AuthProvider`], which would be a
/// wiring bug.
#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("AuthProvider missing above this component")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json() -> String {
        r#"{"userId": 3, "email": "pilot@example.com", "firstName": "Him", "lastName": "Dol"}"#
            .to_string()
    }

    #[test]
    fn restore_requires_both_halves() {
        assert!(restore_session(Some("tok".into()), Some(user_json())).is_some());
        assert!(restore_session(None, Some(user_json())).is_none());
        assert!(restore_session(Some("tok".into()), None).is_none());
    }

    #[test]
    fn restore_rejects_blank_token_and_corrupt_user() {
        assert!(restore_session(Some("   ".into()), Some(user_json())).is_none());
        assert!(restore_session(Some("tok".into()), Some("{not json".into())).is_none());
        assert!(restore_session(Some("tok".into()), Some("{}".into())).is_none());
    }

    #[test]
    fn failed_auth_lands_logged_out_with_message() {
        let state = Rc::new(AuthState {
            phase: SessionPhase::Loading,
            user: None,
            token: None,
            error: None,
        });
        let state = state.reduce(AuthAction::Failed("Invalid password".into()));
        assert_eq!(state.phase, SessionPhase::LoggedOut);
        assert!(!state.is_logged_in());
        assert_eq!(state.error.as_deref(), Some("Invalid password"));
    }

    #[test]
    fn authenticated_transition_sets_session() {
        let user: User = serde_json::from_str(&user_json()).expect("user json");
        let state = Rc::new(AuthState::default());
        let state = state.reduce(AuthAction::Begin);
        assert_eq!(state.phase, SessionPhase::Loading);

        let state = state.reduce(AuthAction::Authenticated { user, token: "tok".into() });
        assert!(state.is_logged_in());
        assert_eq!(state.token.as_deref(), Some("tok"));

        let state = state.reduce(AuthAction::LoggedOut);
        assert!(!state.is_logged_in());
        assert!(state.user.is_none());
    }
}
