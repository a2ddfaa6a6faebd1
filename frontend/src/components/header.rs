use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth_context::{logout, use_auth},
    components::theme_toggle::ThemeToggle,
    config::SITE_LABEL,
    pages::search::SearchQuery,
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let mobile_menu_open = use_state(|| false);
    let search_query = use_state(String::new);

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search_query.set(input.value());
            }
        })
    };

    let on_search_keydown = {
        let search_query = search_query.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            let keyword = search_query.trim().to_string();
            if keyword.is_empty() {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                let query = SearchQuery { q: Some(keyword) };
                let _ = navigator.push_with_query(&Route::Search, &query);
            }
        })
    };

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            logout(&auth);
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::About);
            }
        })
    };

    let can_write = auth.user.as_ref().is_some_and(|user| user.role.can_write());

    let nav_classes = classes!(
        "site-nav",
        (*mobile_menu_open).then_some("site-nav-open")
    );

    html! {
        <header class={classes!("site-header")}>
            <Link<Route> to={Route::About} classes={classes!("site-brand")}>
                { SITE_LABEL }
            </Link<Route>>

            <button
                type="button"
                class={classes!("site-nav-toggle")}
                aria-label="Toggle navigation"
                aria-expanded={(*mobile_menu_open).to_string()}
                onclick={toggle_mobile_menu}
            >
                { "☰" }
            </button>

            <input
                type="search"
                class={classes!("site-search")}
                placeholder="Search the archive..."
                aria-label="Search the archive"
                value={(*search_query).clone()}
                oninput={on_search_input}
                onkeydown={on_search_keydown}
            />

            <nav class={nav_classes} onclick={close_mobile_menu}>
                <Link<Route> to={Route::About} classes={classes!("nav-link")}>
                    { "About" }
                </Link<Route>>
                <Link<Route> to={Route::Blog} classes={classes!("nav-link")}>
                    { "Blog" }
                </Link<Route>>
                {
                    if auth.is_logged_in() {
                        html! {
                            <Link<Route> to={Route::MyLikes} classes={classes!("nav-link")}>
                                { "My Likes" }
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if can_write {
                        html! {
                            <Link<Route> to={Route::WriteBlog} classes={classes!("nav-link")}>
                                { "Write" }
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    match auth.user.as_ref() {
                        Some(user) => html! {
                            <>
                                <Link<Route> to={Route::Profile} classes={classes!("nav-link", "nav-user")}>
                                    { user.display_name() }
                                </Link<Route>>
                                <button
                                    type="button"
                                    class={classes!("nav-link", "nav-logout")}
                                    onclick={on_logout}
                                >
                                    { "Log out" }
                                </button>
                            </>
                        },
                        None => html! {
                            <Link<Route> to={Route::Login} classes={classes!("nav-link")}>
                                { "Log in" }
                            </Link<Route>>
                        },
                    }
                }
                <ThemeToggle class={classes!("nav-theme-toggle")} />
            </nav>
        </header>
    }
}
