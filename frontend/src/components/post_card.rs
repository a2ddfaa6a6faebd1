use hfpv_shared::{LikeStatus, Post};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::like_button::LikeButton;
use crate::router::Route;
use crate::utils::relative_time;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    /// Bubbles the server's like answer up to the owner of the post list.
    pub on_like_change: Callback<(i64, LikeStatus)>,
    pub on_login_required: Callback<()>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = props.post.clone();
    let detail_route = Route::BlogDetail { id: post.id };

    let on_change = {
        let on_like_change = props.on_like_change.clone();
        let post_id = post.id;
        Callback::from(move |status: LikeStatus| on_like_change.emit((post_id, status)))
    };

    html! {
        <article class={classes!("post-card")}>
            <Link<Route> to={detail_route.clone()} classes={classes!("post-card-image")}>
                <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
            </Link<Route>>
            <div class={classes!("post-card-meta")}>
                <Link<Route>
                    to={Route::BlogCategory { category: post.category.clone() }}
                    classes={classes!("post-category")}
                >
                    { &post.category }
                </Link<Route>>
                {
                    if post.featured {
                        html! { <span class={classes!("post-featured-badge")}>{ "★ Featured" }</span> }
                    } else {
                        html! {}
                    }
                }
                <span class={classes!("post-read-time")}>{ &post.read_time }</span>
                <time class={classes!("post-date")}>{ relative_time(&post.date) }</time>
            </div>
            <h3 class={classes!("post-card-title")}>
                <Link<Route> to={detail_route}>
                    { &post.title }
                </Link<Route>>
            </h3>
            <p class={classes!("post-card-excerpt")}>{ &post.excerpt }</p>
            <div class={classes!("post-card-footer")}>
                <span class={classes!("post-author")}>{ &post.author }</span>
                <ul class={classes!("post-tags")}>
                    { for post.tags.iter().map(|tag| html! {
                        <li key={tag.clone()} class={classes!("tag-pill")}>
                            { format!("#{tag}") }
                        </li>
                    }) }
                </ul>
                <LikeButton
                    post_id={post.id}
                    likes={post.likes}
                    is_liked={post.is_liked}
                    on_change={on_change}
                    on_login_required={props.on_login_required.clone()}
                />
            </div>
        </article>
    }
}
