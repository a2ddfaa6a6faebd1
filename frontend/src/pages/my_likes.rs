use hfpv_shared::Post;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    auth_context::use_auth,
    components::{error_banner::ErrorBanner, loading_spinner::LoadingSpinner},
    likes::{self, LikeError},
    router::Route,
    utils::{relative_time, set_document_title},
};

/// Everything the viewer has liked, with one-click unlike. Requires a
/// session; anonymous visitors are sent to the login page.
#[function_component(MyLikesPage)]
pub fn my_likes_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let liked_posts = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let alive = use_mut_ref(|| true);

    use_effect_with((), |_| set_document_title("My Likes"));

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

    {
        let liked_posts = liked_posts.clone();
        let loading = loading.clone();
        let error = error.clone();
        let alive = alive.clone();
        let logged_in = auth.is_logged_in();
        use_effect_with(logged_in, move |logged_in| {
            let alive_for_cleanup = alive.clone();
            if *logged_in {
                spawn_local(async move {
                    let result = api::fetch_my_likes().await;
                    if !*alive.borrow() {
                        return;
                    }
                    match result {
                        Ok(posts) => liked_posts.set(posts),
                        Err(message) => {
                            error.set(format!("Failed to load liked posts: {message}"));
                        },
                    }
                    loading.set(false);
                });
            }
            move || {
                *alive_for_cleanup.borrow_mut() = false;
            }
        });
    }

    let on_unlike = {
        let liked_posts = liked_posts.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let alive = alive.clone();
        Callback::from(move |post_id: i64| {
            let liked_posts = liked_posts.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let alive = alive.clone();
            spawn_local(async move {
                let result = likes::toggle(post_id, true).await;
                if !*alive.borrow() {
                    return;
                }
                match result {
                    Ok(status) => {
                        if status.is_liked {
                            // Still liked per the server; keep the row but
                            // adopt the authoritative count.
                            let mut next = (*liked_posts).clone();
                            likes::reconcile(&mut next, post_id, status);
                            liked_posts.set(next);
                        } else {
                            let mut next = (*liked_posts).clone();
                            next.retain(|post| post.id != post_id);
                            liked_posts.set(next);
                        }
                    },
                    Err(LikeError::LoginRequired) => {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::Login);
                        }
                    },
                    Err(LikeError::Request(message)) => {
                        error.set(format!("Failed to unlike: {message}"));
                    },
                }
            });
        })
    };

    html! {
        <main class={classes!("my-likes-page")}>
            <div class={classes!("page-header")}>
                <h1>{ "My Likes" }</h1>
            </div>

            {
                if error.is_empty() {
                    html! {}
                } else {
                    html! { <ErrorBanner message={(*error).clone()} /> }
                }
            }

            {
                if *loading {
                    html! { <LoadingSpinner /> }
                } else if liked_posts.is_empty() {
                    html! {
                        <div class={classes!("empty-state")}>
                            <p>{ "Nothing liked yet." }</p>
                            <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                                { "Browse the blog" }
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {
                        <ul class={classes!("liked-list")}>
                            { for liked_posts.iter().map(|post| {
                                let unlike = {
                                    let on_unlike = on_unlike.clone();
                                    let post_id = post.id;
                                    Callback::from(move |_| on_unlike.emit(post_id))
                                };
                                html! {
                                    <li key={post.id} class={classes!("liked-item")}>
                                        <Link<Route>
                                            to={Route::BlogDetail { id: post.id }}
                                            classes={classes!("liked-item-title")}
                                        >
                                            { &post.title }
                                        </Link<Route>>
                                        <time class={classes!("post-date")}>
                                            { relative_time(&post.date) }
                                        </time>
                                        <button
                                            type="button"
                                            class={classes!("liked-item-remove")}
                                            onclick={unlike}
                                            title="Unlike"
                                            aria-label={format!("Unlike {}", post.title)}
                                        >
                                            { "✕" }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                }
            }
        </main>
    }
}
