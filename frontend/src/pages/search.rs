use hfpv_shared::LikeStatus;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, PostPage},
    components::{
        loading_spinner::LoadingSpinner, pagination::Pagination, post_card::PostCard,
    },
    likes,
    router::Route,
    utils::set_document_title,
};

const POSTS_PER_PAGE: usize = 10;

/// `?q=` query parameter for the search route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search keyword.
    #[serde(default)]
    pub q: Option<String>,
}

/// Server-side keyword search, reached from the header. Unlike the listing
/// filters (which narrow an already-fetched set), this searches the whole
/// archive through the backend.
#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let location = use_location();
    let keyword = location
        .as_ref()
        .and_then(|loc| loc.query::<SearchQuery>().ok())
        .and_then(|query| query.q)
        .unwrap_or_default()
        .trim()
        .to_string();

    let page = use_state(|| 1usize);
    let result = use_state(|| None::<PostPage>);
    let login_prompt = use_state(|| false);
    let alive = use_mut_ref(|| true);

    use_effect_with((), |_| set_document_title("Search"));

    // New keyword restarts from page one.
    {
        let page = page.clone();
        use_effect_with(keyword.clone(), move |_| {
            page.set(1);
            || ()
        });
    }

    {
        let result = result.clone();
        let alive = alive.clone();
        use_effect_with((keyword.clone(), *page), move |(keyword, page)| {
            let keyword = keyword.clone();
            let page = *page;
            result.set(None);
            let alive_for_cleanup = alive.clone();
            spawn_local(async move {
                let fetched = api::search_posts(&keyword, page, POSTS_PER_PAGE).await;
                if *alive.borrow() {
                    result.set(Some(fetched));
                }
            });
            move || {
                *alive_for_cleanup.borrow_mut() = false;
            }
        });
    }

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |target: usize| page.set(target))
    };

    let on_like_change = {
        let result = result.clone();
        Callback::from(move |(post_id, status): (i64, LikeStatus)| {
            if let Some(mut current) = (*result).clone() {
                likes::reconcile(&mut current.posts, post_id, status);
                result.set(Some(current));
            }
        })
    };

    let on_login_required = {
        let login_prompt = login_prompt.clone();
        Callback::from(move |_| login_prompt.set(true))
    };

    html! {
        <main class={classes!("search-page")}>
            <div class={classes!("page-header")}>
                <h1>{ "Search" }</h1>
                {
                    if keyword.is_empty() {
                        html! { <p class={classes!("page-subtitle")}>{ "Type something in the search box above." }</p> }
                    } else {
                        html! {
                            <p class={classes!("page-subtitle")}>
                                { format!("Results for \"{keyword}\"") }
                            </p>
                        }
                    }
                }
            </div>

            {
                if *login_prompt {
                    html! {
                        <div class={classes!("login-prompt")} role="alert">
                            <p>{ "Log in to like posts." }</p>
                            <Link<Route> to={Route::Login} classes={classes!("login-prompt-link")}>
                                { "Go to login" }
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                match result.as_ref() {
                    None if keyword.is_empty() => html! {},
                    None => html! { <LoadingSpinner /> },
                    Some(fetched) if fetched.posts.is_empty() => html! {
                        <div class={classes!("empty-state")}>
                            <p>{ format!("No posts match \"{keyword}\".") }</p>
                            <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                                { "Browse the blog" }
                            </Link<Route>>
                        </div>
                    },
                    Some(fetched) => html! {
                        <>
                            <div class={classes!("post-grid")}>
                                { for fetched.posts.iter().map(|post| html! {
                                    <PostCard
                                        key={post.id}
                                        post={post.clone()}
                                        on_like_change={on_like_change.clone()}
                                        on_login_required={on_login_required.clone()}
                                    />
                                }) }
                            </div>
                            <Pagination
                                current_page={fetched.current_page}
                                total_pages={fetched.total_pages}
                                on_page_change={on_page_change.clone()}
                            />
                        </>
                    },
                }
            }
        </main>
    }
}
