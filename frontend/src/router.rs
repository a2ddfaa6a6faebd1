use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages, storage,
};

/// Application routes.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    /// Profile / About landing page.
    #[at("/")]
    About,

    /// Blog listing with search, category and featured filters.
    #[at("/blog")]
    Blog,

    /// One post.
    #[at("/blog/:id")]
    BlogDetail {
        /// Server post id.
        id: i64,
    },

    /// Posts in one category, server-paginated.
    #[at("/blog/category/:category")]
    BlogCategory {
        /// Category slug.
        category: String,
    },

    /// Server-side keyword search (`?q=`).
    #[at("/search")]
    Search,

    /// Posts the viewer has liked.
    #[at("/likes")]
    MyLikes,

    /// Login and registration.
    #[at("/login")]
    Login,

    /// OAuth redirect target.
    #[at("/auth/callback")]
    AuthCallback,

    /// Post editor, create mode.
    #[at("/write")]
    WriteBlog,

    /// Post editor, edit mode.
    #[at("/write/:id")]
    EditPost {
        /// Post being edited.
        id: i64,
    },

    /// Account settings.
    #[at("/profile")]
    Profile,

    /// Everything else.
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Blog => html! { <pages::blog::BlogPage /> },
        Route::BlogDetail { id } => html! { <pages::blog_detail::BlogDetailPage id={id} /> },
        Route::BlogCategory { category } => {
            html! { <pages::category::CategoryPage category={category} /> }
        },
        Route::Search => html! { <pages::search::SearchPage /> },
        Route::MyLikes => html! { <pages::my_likes::MyLikesPage /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::AuthCallback => html! { <pages::auth_callback::AuthCallbackPage /> },
        Route::WriteBlog => html! { <pages::write_blog::WriteBlogPage id={None::<i64>} /> },
        Route::EditPost { id } => html! { <pages::write_blog::WriteBlogPage id={Some(id)} /> },
        Route::Profile => html! { <pages::profile::ProfilePage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

/// Remembers the last visited path, and on a fresh launch at the root
/// resumes wherever the previous session left off.
#[function_component(RouteMemo)]
fn route_memo() -> Html {
    let location = use_location();
    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        let at_root = location.as_ref().is_some_and(|loc| loc.path() == "/");
        use_effect_with((), move |_| {
            if at_root {
                if let Some(stored) = storage::last_page() {
                    if let Some(route) = Route::recognize(&stored) {
                        if !matches!(route, Route::About | Route::AuthCallback | Route::NotFound)
                        {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&route);
                            }
                        }
                    }
                }
            }
            || ()
        });
    }

    use_effect_with(location, move |location| {
        if let Some(location) = location {
            storage::set_last_page(location.path());
        }
        || ()
    });

    Html::default()
}

/// Top-level router and page shell.
#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <RouteMemo />
            <div class="app-shell">
                <Header />
                <div class="app-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
