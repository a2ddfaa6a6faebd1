use hfpv_shared::{LikeStatus, Post};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    auth_context::use_auth,
    components::{
        like_button::LikeButton, loading_spinner::LoadingSpinner, raw_html::RawHtml,
    },
    router::Route,
    utils::{relative_time, set_document_title},
};

#[derive(Properties, PartialEq)]
pub struct BlogDetailProps {
    pub id: i64,
}

/// One post: sanitized body, meta, like toggle, and a few related reads.
#[function_component(BlogDetailPage)]
pub fn blog_detail_page(props: &BlogDetailProps) -> Html {
    let auth = use_auth();
    let post = use_state(|| None::<Post>);
    let related = use_state(Vec::<Post>::new);
    let loading = use_state(|| true);
    let login_prompt = use_state(|| false);
    let alive = use_mut_ref(|| true);

    {
        let post = post.clone();
        let related = related.clone();
        let loading = loading.clone();
        let alive = alive.clone();
        let logged_in = auth.is_logged_in();
        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            let alive_for_cleanup = alive.clone();
            spawn_local(async move {
                let mut fetched = api::fetch_post(id).await;

                // The list payload may predate the viewer's last toggle;
                // ask for the authoritative like state when logged in.
                if logged_in {
                    if let (Some(post), Ok(status)) =
                        (fetched.as_mut(), api::fetch_like_status(id).await)
                    {
                        post.apply_like_status(status);
                    }
                }

                let fetched_related = if fetched.is_some() {
                    api::fetch_related_posts(id, 3).await
                } else {
                    Vec::new()
                };

                if !*alive.borrow() {
                    return;
                }
                if let Some(found) = fetched.as_ref() {
                    set_document_title(&found.title);
                }
                post.set(fetched);
                related.set(fetched_related);
                loading.set(false);
            });
            move || {
                *alive_for_cleanup.borrow_mut() = false;
            }
        });
    }

    let on_like_change = {
        let post = post.clone();
        Callback::from(move |status: LikeStatus| {
            if let Some(mut current) = (*post).clone() {
                current.apply_like_status(status);
                post.set(Some(current));
            }
        })
    };

    let on_login_required = {
        let login_prompt = login_prompt.clone();
        Callback::from(move |_| login_prompt.set(true))
    };

    if *loading {
        return html! {
            <main class={classes!("blog-detail-page")}>
                <LoadingSpinner />
            </main>
        };
    }

    let Some(current) = (*post).clone() else {
        // Not-found state with a way back to the list.
        return html! {
            <main class={classes!("blog-detail-page")}>
                <div class={classes!("not-found-state")}>
                    <h2>{ "Post not found" }</h2>
                    <p>{ "It may have been unpublished or the link is stale." }</p>
                    <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                        { "← Back to blog" }
                    </Link<Route>>
                </div>
            </main>
        };
    };

    html! {
        <main class={classes!("blog-detail-page")}>
            <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                { "← Back to blog" }
            </Link<Route>>

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

            <article class={classes!("blog-detail")}>
                <header class={classes!("blog-detail-header")}>
                    <div class={classes!("post-card-meta")}>
                        <span class={classes!("post-category")}>{ &current.category }</span>
                        {
                            if current.featured {
                                html! { <span class={classes!("post-featured-badge")}>{ "★ Featured" }</span> }
                            } else {
                                html! {}
                            }
                        }
                        <time class={classes!("post-date")}>{ relative_time(&current.date) }</time>
                        <span class={classes!("post-read-time")}>{ &current.read_time }</span>
                    </div>
                    <h1 class={classes!("blog-detail-title")}>{ &current.title }</h1>
                    <p class={classes!("post-author")}>{ format!("By {}", current.author) }</p>
                </header>

                <img
                    class={classes!("blog-detail-image")}
                    src={current.image.clone()}
                    alt={current.title.clone()}
                />

                <RawHtml
                    class={classes!("blog-detail-body")}
                    html={current.content.clone().unwrap_or_default()}
                />

                <ul class={classes!("post-tags")}>
                    { for current.tags.iter().map(|tag| html! {
                        <li key={tag.clone()} class={classes!("tag-pill")}>{ format!("#{tag}") }</li>
                    }) }
                </ul>

                <footer class={classes!("blog-detail-footer")}>
                    <span class={classes!("post-views")}>
                        { format!("{} views", current.view_count) }
                    </span>
                    <LikeButton
                        post_id={current.id}
                        likes={current.likes}
                        is_liked={current.is_liked}
                        on_change={on_like_change}
                        on_login_required={on_login_required}
                    />
                </footer>
            </article>

            {
                if related.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class={classes!("related-posts")}>
                            <h3>{ "More to read" }</h3>
                            <div class={classes!("related-posts-grid")}>
                                { for related.iter().map(|related_post| html! {
                                    <Link<Route>
                                        key={related_post.id}
                                        to={Route::BlogDetail { id: related_post.id }}
                                        classes={classes!("related-post-card")}
                                    >
                                        <img src={related_post.image.clone()} alt={related_post.title.clone()} loading="lazy" />
                                        <h4>{ &related_post.title }</h4>
                                        <p class={classes!("related-post-excerpt")}>{ &related_post.excerpt }</p>
                                        <div class={classes!("post-card-meta")}>
                                            <span class={classes!("post-category")}>{ &related_post.category }</span>
                                            <time class={classes!("post-date")}>
                                                { relative_time(&related_post.date) }
                                            </time>
                                        </div>
                                    </Link<Route>>
                                }) }
                            </div>
                        </section>
                    }
                }
            }
        </main>
    }
}
