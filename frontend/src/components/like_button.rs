use hfpv_shared::LikeStatus;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::auth_context::use_auth;
use crate::likes::{self, LikeError};

#[derive(Properties, PartialEq)]
pub struct LikeButtonProps {
    pub post_id: i64,
    pub likes: u32,
    pub is_liked: bool,
    /// Fired with the server's authoritative answer after a toggle.
    pub on_change: Callback<LikeStatus>,
    /// Fired instead of any network call when no session is present, and
    /// when the backend rejects the toggle as unauthenticated.
    pub on_login_required: Callback<()>,
}

/// Heart button for one post. Disables itself for the duration of its own
/// request only; other posts' buttons stay interactive.
#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let auth = use_auth();
    let busy = use_state(|| false);
    let alive = use_mut_ref(|| true);

    {
        let alive = alive.clone();
        use_effect_with((), move |_| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    let onclick = {
        let busy = busy.clone();
        let alive = alive.clone();
        let logged_in = auth.is_logged_in();
        let post_id = props.post_id;
        let on_change = props.on_change.clone();
        let on_login_required = props.on_login_required.clone();

        Callback::from(move |_| {
            if *busy {
                return;
            }
            if !logged_in {
                on_login_required.emit(());
                return;
            }

            busy.set(true);
            let busy = busy.clone();
            let alive = alive.clone();
            let on_change = on_change.clone();
            let on_login_required = on_login_required.clone();
            spawn_local(async move {
                let result = likes::toggle(post_id, true).await;
                if !*alive.borrow() {
                    return;
                }
                match result {
                    Ok(status) => on_change.emit(status),
                    Err(LikeError::LoginRequired) => on_login_required.emit(()),
                    Err(LikeError::Request(message)) => {
                        web_sys::console::error_1(
                            &format!("Failed to toggle like: {message}").into(),
                        );
                    },
                }
                busy.set(false);
            });
        })
    };

    let label = if props.is_liked { "Unlike this post" } else { "Like this post" };

    html! {
        <button
            type="button"
            class={classes!("like-button", props.is_liked.then_some("liked"))}
            disabled={*busy}
            onclick={onclick}
            aria-label={label}
            aria-pressed={props.is_liked.to_string()}
        >
            <span aria-hidden="true">{ if props.is_liked { "♥" } else { "♡" } }</span>
            <span class={classes!("like-count")}>{ props.likes }</span>
        </button>
    }
}
