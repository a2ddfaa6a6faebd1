use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::ProfileUpdate,
    auth_context::{self, use_auth},
    router::Route,
    utils::set_document_title,
};

/// Account settings: name edits, role display, and — for password accounts
/// only — the password-change entry point. Google-backed accounts manage
/// their password with Google, so that section is hidden for them.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let notice = use_state(|| None::<Result<(), String>>);
    let saving = use_state(|| false);

    use_effect_with((), |_| set_document_title("Profile"));

    {
        let navigator = navigator.clone();
        let logged_in = auth.is_logged_in();
        use_effect_with(logged_in, move |logged_in| {
            if !*logged_in {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Login);
                }
            }
            || ()
        });
    }

    // Seed the form whenever the session user changes (login, save).
    {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let user = auth.user.clone();
        use_effect_with(user, move |user| {
            if let Some(user) = user {
                first_name.set(user.first_name.clone());
                last_name.set(user.last_name.clone());
            }
            || ()
        });
    }

    let Some(user) = auth.user.clone() else {
        return Html::default();
    };

    let on_first_input = {
        let first_name = first_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                first_name.set(input.value());
            }
        })
    };

    let on_last_input = {
        let last_name = last_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                last_name.set(input.value());
            }
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);
            notice.set(None);

            let update = ProfileUpdate {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
            };
            let on_done = {
                let notice = notice.clone();
                let saving = saving.clone();
                Callback::from(move |result: Result<(), String>| {
                    notice.set(Some(result));
                    saving.set(false);
                })
            };
            auth_context::update_profile(auth.clone(), update, on_done);
        })
    };

    let role_label = match user.role {
        hfpv_shared::UserRole::Public => "Reader",
        hfpv_shared::UserRole::Admin => "Author",
        hfpv_shared::UserRole::Root => "Owner",
    };

    html! {
        <main class={classes!("profile-page")}>
            <div class={classes!("page-header")}>
                <h1>{ "Profile" }</h1>
            </div>

            <section class={classes!("profile-card")}>
                <dl class={classes!("profile-facts")}>
                    <dt>{ "Email" }</dt>
                    <dd>
                        { &user.email }
                        {
                            if user.email_verified {
                                html! { <span class={classes!("verified-badge")}>{ " ✓ verified" }</span> }
                            } else {
                                html! { <span class={classes!("unverified-badge")}>{ " unverified" }</span> }
                            }
                        }
                    </dd>
                    <dt>{ "Role" }</dt>
                    <dd>{ role_label }</dd>
                </dl>

                <form class={classes!("profile-form")} onsubmit={on_submit}>
                    {
                        match notice.as_ref() {
                            Some(Ok(())) => html! {
                                <p class={classes!("form-success")} role="status">{ "Profile saved." }</p>
                            },
                            Some(Err(message)) => html! {
                                <p class={classes!("form-error")} role="alert">{ message }</p>
                            },
                            None => html! {},
                        }
                    }

                    <label class={classes!("form-field")}>
                        { "First name" }
                        <input
                            type="text"
                            value={(*first_name).clone()}
                            oninput={on_first_input}
                            autocomplete="given-name"
                        />
                    </label>
                    <label class={classes!("form-field")}>
                        { "Last name" }
                        <input
                            type="text"
                            value={(*last_name).clone()}
                            oninput={on_last_input}
                            autocomplete="family-name"
                        />
                    </label>

                    <button type="submit" class={classes!("submit-btn")} disabled={*saving}>
                        { "Save" }
                    </button>
                </form>

                {
                    if user.has_password() {
                        html! {
                            <section class={classes!("password-section")}>
                                <h2>{ "Password" }</h2>
                                <p>{ "Password changes are handled via email reset." }</p>
                            </section>
                        }
                    } else {
                        html! {
                            <section class={classes!("password-section")}>
                                <h2>{ "Sign-in" }</h2>
                                <p>{ "This account signs in with Google." }</p>
                            </section>
                        }
                    }
                }
            </section>
        </main>
    }
}
