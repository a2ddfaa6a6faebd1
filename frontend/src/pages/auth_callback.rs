use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    auth_context::{apply_session, use_auth, AuthAction},
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    retry::RetryPolicy,
    router::Route,
};

fn oauth_error_param() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("error").filter(|value| !value.is_empty())
}

/// OAuth redirect target. The identity provider sends the browser here; the
/// backend session may lag the redirect by a moment, so the probe runs
/// under a small fixed-delay retry before giving up.
#[function_component(AuthCallbackPage)]
pub fn auth_callback_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let fail = |message: String| {
                    auth.dispatch(AuthAction::Failed(message));
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push(&Route::Login);
                    }
                };

                // The provider reports cancellations via a query param; no
                // point probing the session in that case.
                if let Some(error) = oauth_error_param() {
                    fail(format!("Social login failed: {error}"));
                    return;
                }

                let session = RetryPolicy::SESSION_PROBE
                    .run(|| async {
                        let session = api::fetch_session_user().await?;
                        if session.authenticated {
                            Ok(session)
                        } else {
                            Err("Session not ready".to_string())
                        }
                    })
                    .await;

                match session {
                    Ok(session) => match (session.user, session.jwt_token) {
                        (Some(user), Some(token)) => {
                            apply_session(&auth, user, token);
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::About);
                            }
                        },
                        (None, Some(token)) => {
                            // Some provider flows mint the token before the
                            // session user is readable; the profile endpoint
                            // fills the gap.
                            match api::fetch_oauth_profile().await {
                                Ok(user) => {
                                    apply_session(&auth, user, token);
                                    if let Some(navigator) = navigator.as_ref() {
                                        navigator.push(&Route::About);
                                    }
                                },
                                Err(message) => {
                                    fail(format!("Could not load the account profile: {message}"));
                                },
                            }
                        },
                        _ => fail("Could not read the signed-in user from the session.".into()),
                    },
                    Err(message) => {
                        fail(format!("Could not verify the login session: {message}"));
                    },
                }
            });
            || ()
        });
    }

    html! {
        <main class={classes!("auth-callback-page")}>
            <div class={classes!("auth-callback-card")}>
                <LoadingSpinner size={SpinnerSize::Large} label="Processing login..." />
                <h2>{ "Processing login..." }</h2>
                <p>{ "Hang tight, this only takes a moment." }</p>
            </div>
        </main>
    }
}
