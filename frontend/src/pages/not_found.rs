use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("not-found-page")}>
            <h2>{ "404 — page not found" }</h2>
            <p>{ "That page doesn't exist. The blog is this way." }</p>
            <Link<Route> to={Route::Blog} classes={classes!("back-link")}>
                { "← Back to blog" }
            </Link<Route>>
        </main>
    }
}
