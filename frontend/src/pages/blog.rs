use hfpv_shared::{Category, LikeStatus, Post};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        loading_spinner::LoadingSpinner, pagination::Pagination, post_card::PostCard,
    },
    filter::{self, FilterState},
    hooks::use_pagination,
    likes,
    router::Route,
    utils::set_document_title,
};

const POSTS_PER_PAGE: usize = 6;

/// Blog listing. One bulk fetch feeds a client-side filter pipeline, so
/// typing a search term or switching category never refetches.
#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let posts = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let filters = use_state(FilterState::default);
    let login_prompt = use_state(|| false);
    let alive = use_mut_ref(|| true);

    use_effect_with((), |_| set_document_title("Blog"));

    {
        let posts = posts.clone();
        let loading = loading.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            let alive_for_cleanup = alive.clone();
            spawn_local(async move {
                let page = api::fetch_posts(1, api::BULK_PAGE_SIZE).await;
                if *alive.borrow() {
                    posts.set(page.posts);
                    loading.set(false);
                }
            });
            move || {
                *alive_for_cleanup.borrow_mut() = false;
            }
        });
    }

    // Re-runs whenever the fetched set or the filters change; pure function
    // of both.
    let visible_posts = use_memo(((*posts).clone(), (*filters).clone()), |(posts, filters)| {
        filter::apply(posts, filters)
    });

    let (page_posts, current_page, total_pages, go_to_page) =
        use_pagination((*visible_posts).clone(), POSTS_PER_PAGE);

    let on_search_input = {
        let filters = filters.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*filters).clone();
                next.search_term = input.value();
                filters.set(next);
            }
        })
    };

    let on_category_change = {
        let filters = filters.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*filters).clone();
                next.category = Category::parse(&select.value());
                filters.set(next);
            }
        })
    };

    let on_featured_toggle = {
        let filters = filters.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*filters).clone();
                next.featured_only = input.checked();
                filters.set(next);
            }
        })
    };

    let clear_filters = {
        let filters = filters.clone();
        Callback::from(move |_| {
            let mut next = (*filters).clone();
            next.clear();
            filters.set(next);
        })
    };

    let on_like_change = {
        let posts = posts.clone();
        Callback::from(move |(post_id, status): (i64, LikeStatus)| {
            let mut next = (*posts).clone();
            likes::reconcile(&mut next, post_id, status);
            posts.set(next);
        })
    };

    let on_login_required = {
        let login_prompt = login_prompt.clone();
        Callback::from(move |_| login_prompt.set(true))
    };

    let dismiss_login_prompt = {
        let login_prompt = login_prompt.clone();
        Callback::from(move |_| login_prompt.set(false))
    };

    let search_active = !filters.search_term.trim().is_empty();

    html! {
        <main class={classes!("blog-page")}>
            <div class={classes!("page-header")}>
                <h1>{ "Blog" }</h1>
                <p class={classes!("page-subtitle")}>
                    { "Flight footage, build logs, runs, and trips." }
                </p>
            </div>

            {
                if *login_prompt {
                    html! {
                        <div class={classes!("login-prompt")} role="alert">
                            <p>{ "Log in to like posts." }</p>
                            <Link<Route> to={Route::Login} classes={classes!("login-prompt-link")}>
                                { "Go to login" }
                            </Link<Route>>
                            <button
                                type="button"
                                class={classes!("login-prompt-dismiss")}
                                onclick={dismiss_login_prompt}
                                aria-label="Dismiss"
                            >
                                { "×" }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class={classes!("blog-filters")}>
                <input
                    type="search"
                    class={classes!("blog-search")}
                    placeholder="Search posts..."
                    value={filters.search_term.clone()}
                    oninput={on_search_input}
                    aria-label="Search posts"
                />
                <select
                    class={classes!("blog-category-select")}
                    onchange={on_category_change}
                    aria-label="Filter by category"
                >
                    <option value="" selected={filters.category.is_none()}>
                        { "All categories" }
                    </option>
                    { for Category::ALL.iter().map(|category| html! {
                        <option
                            value={category.as_str()}
                            selected={filters.category == Some(*category)}
                        >
                            { category.label() }
                        </option>
                    }) }
                </select>
                <label class={classes!("blog-featured-filter")}>
                    <input
                        type="checkbox"
                        checked={filters.featured_only}
                        onchange={on_featured_toggle}
                    />
                    { "Featured only" }
                </label>
            </div>

            {
                if *loading {
                    html! { <LoadingSpinner /> }
                } else if page_posts.is_empty() {
                    let message = if search_active {
                        format!("No posts match \"{}\".", filters.search_term.trim())
                    } else if filters.is_active() {
                        "No posts match the current filters.".to_string()
                    } else {
                        "No posts yet. Check back soon.".to_string()
                    };
                    html! {
                        <div class={classes!("empty-state")}>
                            <p>{ message }</p>
                            {
                                if filters.is_active() {
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("clear-filters-btn")}
                                            onclick={clear_filters}
                                        >
                                            { "Clear filters" }
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class={classes!("post-grid")}>
                                { for page_posts.iter().map(|post| html! {
                                    <PostCard
                                        key={post.id}
                                        post={post.clone()}
                                        on_like_change={on_like_change.clone()}
                                        on_login_required={on_login_required.clone()}
                                    />
                                }) }
                            </div>
                            <Pagination
                                current_page={current_page}
                                total_pages={total_pages}
                                on_page_change={go_to_page}
                            />
                        </>
                    }
                }
            }
        </main>
    }
}
