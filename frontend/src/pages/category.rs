use hfpv_shared::{Category, LikeStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

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

#[derive(Properties, PartialEq)]
pub struct CategoryProps {
    pub category: String,
}

/// Posts in one category, paginated by the server. Deep-linkable from the
/// category chip on every post card.
#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryProps) -> Html {
    let page = use_state(|| 1usize);
    let result = use_state(|| None::<PostPage>);
    let login_prompt = use_state(|| false);
    let alive = use_mut_ref(|| true);

    let label = Category::parse(&props.category)
        .map(|category| category.label().to_string())
        .unwrap_or_else(|| props.category.clone());

    {
        let label = label.clone();
        use_effect_with(label.clone(), move |_| set_document_title(&label));
    }

    {
        let result = result.clone();
        let alive = alive.clone();
        use_effect_with((props.category.clone(), *page), move |(category, page)| {
            let category = category.clone();
            let page = *page;
            result.set(None);
            let alive_for_cleanup = alive.clone();
            spawn_local(async move {
                let fetched =
                    api::fetch_posts_by_category(&category, page, POSTS_PER_PAGE).await;
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
        <main class={classes!("category-page")}>
            <div class={classes!("page-header")}>
                <h1>{ &label }</h1>
                <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                    { "← All posts" }
                </Link<Route>>
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
                    None => html! { <LoadingSpinner /> },
                    Some(fetched) if fetched.posts.is_empty() => html! {
                        <div class={classes!("empty-state")}>
                            <p>{ format!("No posts in {label} yet.") }</p>
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
