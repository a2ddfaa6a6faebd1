use std::collections::HashMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth_context::{self, use_auth, AuthAction, SessionPhase},
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    config::API_BASE,
    router::Route,
    utils::set_document_title,
};

#[derive(Clone, Copy, PartialEq)]
enum FormMode {
    Login,
    Register,
}

#[derive(Clone, Default, PartialEq)]
struct FormFields {
    email: String,
    password: String,
    confirm_password: String,
    first_name: String,
    last_name: String,
}

/// Validate before any network call. Returns a field-name -> message map;
/// empty means the form may submit.
fn validate(mode: FormMode, fields: &FormFields) -> HashMap<&'static str, &'static str> {
    let mut errors = HashMap::new();
    if fields.email.trim().is_empty() {
        errors.insert("email", "Email is required.");
    }
    if fields.password.is_empty() {
        errors.insert("password", "Password is required.");
    }
    if mode == FormMode::Register {
        if fields.password != fields.confirm_password {
            errors.insert("confirm_password", "Passwords do not match.");
        }
        if fields.first_name.trim().is_empty() {
            errors.insert("first_name", "First name is required.");
        }
    }
    errors
}

/// Login / registration, plus the Google OAuth entry point.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let mode = use_state(|| FormMode::Login);
    let fields = use_state(FormFields::default);
    let field_errors = use_state(HashMap::<&'static str, &'static str>::new);

    use_effect_with((), |_| set_document_title("Log in"));

    // A completed login (from here or the OAuth callback) leaves this page.
    {
        let navigator = navigator.clone();
        let logged_in = auth.is_logged_in();
        use_effect_with(logged_in, move |logged_in| {
            if *logged_in {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::About);
                }
            }
            || ()
        });
    }

    let loading = auth.phase == SessionPhase::Loading;

    let set_field = {
        let fields = fields.clone();
        move |name: &'static str| {
            let fields = fields.clone();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    let mut next = (*fields).clone();
                    match name {
                        "email" => next.email = input.value(),
                        "password" => next.password = input.value(),
                        "confirm_password" => next.confirm_password = input.value(),
                        "first_name" => next.first_name = input.value(),
                        _ => next.last_name = input.value(),
                    }
                    fields.set(next);
                }
            })
        }
    };

    let switch_mode = {
        let mode = mode.clone();
        let field_errors = field_errors.clone();
        let auth = auth.clone();
        Callback::from(move |_| {
            mode.set(match *mode {
                FormMode::Login => FormMode::Register,
                FormMode::Register => FormMode::Login,
            });
            field_errors.set(HashMap::new());
            auth.dispatch(AuthAction::ClearError);
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let mode = mode.clone();
        let fields = fields.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if loading {
                return;
            }

            let errors = validate(*mode, &fields);
            if !errors.is_empty() {
                field_errors.set(errors);
                return;
            }
            field_errors.set(HashMap::new());

            let current = (*fields).clone();
            match *mode {
                FormMode::Login => auth_context::login(
                    auth.clone(),
                    current.email.trim().to_string(),
                    current.password,
                ),
                FormMode::Register => auth_context::register(
                    auth.clone(),
                    current.email.trim().to_string(),
                    current.password,
                    current.first_name.trim().to_string(),
                    current.last_name.trim().to_string(),
                ),
            }
        })
    };

    let on_google = Callback::from(move |_| {
        if let Some(win) = web_sys::window() {
            let _ = win.location().assign(&format!("{API_BASE}/oauth2/authorization/google"));
        }
    });

    let field_error = |name: &str| -> Html {
        match field_errors.get(name) {
            Some(message) => html! { <p class={classes!("field-error")}>{ *message }</p> },
            None => html! {},
        }
    };

    let is_register = *mode == FormMode::Register;
    let title = if is_register { "Create account" } else { "Welcome back" };
    let submit_label = if is_register { "Register" } else { "Log in" };
    let switch_label = if is_register {
        "Already have an account? Log in"
    } else {
        "New here? Create an account"
    };

    html! {
        <main class={classes!("login-page")}>
            <form class={classes!("login-card")} onsubmit={on_submit}>
                <h1>{ title }</h1>

                {
                    match auth.error.as_ref() {
                        Some(message) => html! {
                            <p class={classes!("form-error")} role="alert">{ message }</p>
                        },
                        None => html! {},
                    }
                }

                <label class={classes!("form-field")}>
                    { "Email" }
                    <input
                        type="email"
                        value={fields.email.clone()}
                        oninput={set_field("email")}
                        autocomplete="email"
                    />
                    { field_error("email") }
                </label>

                {
                    if is_register {
                        html! {
                            <>
                                <label class={classes!("form-field")}>
                                    { "First name" }
                                    <input
                                        type="text"
                                        value={fields.first_name.clone()}
                                        oninput={set_field("first_name")}
                                        autocomplete="given-name"
                                    />
                                    { field_error("first_name") }
                                </label>
                                <label class={classes!("form-field")}>
                                    { "Last name" }
                                    <input
                                        type="text"
                                        value={fields.last_name.clone()}
                                        oninput={set_field("last_name")}
                                        autocomplete="family-name"
                                    />
                                </label>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                <label class={classes!("form-field")}>
                    { "Password" }
                    <input
                        type="password"
                        value={fields.password.clone()}
                        oninput={set_field("password")}
                        autocomplete={if is_register { "new-password" } else { "current-password" }}
                    />
                    { field_error("password") }
                </label>

                {
                    if is_register {
                        html! {
                            <label class={classes!("form-field")}>
                                { "Confirm password" }
                                <input
                                    type="password"
                                    value={fields.confirm_password.clone()}
                                    oninput={set_field("confirm_password")}
                                    autocomplete="new-password"
                                />
                                { field_error("confirm_password") }
                            </label>
                        }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class={classes!("submit-btn")} disabled={loading}>
                    {
                        if loading {
                            html! { <LoadingSpinner size={SpinnerSize::Small} /> }
                        } else {
                            html! { submit_label }
                        }
                    }
                </button>

                <button
                    type="button"
                    class={classes!("google-btn")}
                    onclick={on_google}
                    disabled={loading}
                >
                    { "Continue with Google" }
                </button>

                <button type="button" class={classes!("mode-switch")} onclick={switch_mode}>
                    { switch_label }
                </button>
            </form>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            email: "pilot@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            first_name: "Him".into(),
            last_name: "Dol".into(),
        }
    }

    #[test]
    fn empty_fields_block_submission() {
        let errors = validate(FormMode::Login, &FormFields::default());
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn password_mismatch_is_caught_in_register_mode() {
        let mut fields = filled();
        fields.confirm_password = "different".into();
        let errors = validate(FormMode::Register, &fields);
        assert_eq!(errors.get("confirm_password"), Some(&"Passwords do not match."));

        // Login mode never checks the confirmation field.
        assert!(validate(FormMode::Login, &fields).is_empty());
    }

    #[test]
    fn valid_forms_pass() {
        assert!(validate(FormMode::Login, &filled()).is_empty());
        assert!(validate(FormMode::Register, &filled()).is_empty());
    }
}
