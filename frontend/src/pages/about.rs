use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{api, config::SITE_LABEL, router::Route, utils::set_document_title};

/// Landing page: who runs the site and what gets posted. Counts one visit
/// per mount; tracking is fire-and-forget decoration.
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_effect_with((), |_| {
        set_document_title("About");
        spawn_local(api::track_visit());
    });

    html! {
        <main class={classes!("about-page")}>
            <section class={classes!("about-hero")}>
                <h1>{ SITE_LABEL }</h1>
                <p class={classes!("about-tagline")}>
                    { "FPV pilot, occasional runner, reluctant editor." }
                </p>
            </section>

            <section class={classes!("about-body")}>
                <p>
                    { "This site collects flight footage and the build logs behind it, \
                       plus whatever else survives the week: training runs, trips, and \
                       production notes from the editing desk." }
                </p>
                <p>
                    { "Everything published lands on the blog; featured posts float to \
                       the top." }
                </p>
                <Link<Route> to={Route::Blog} classes={classes!("about-cta")}>
                    { "Read the blog →" }
                </Link<Route>>
            </section>

            <section class={classes!("about-gear")}>
                <h2>{ "Current gear" }</h2>
                <ul>
                    <li>{ "5\" freestyle quad, 6S" }</li>
                    <li>{ "3\" cinewhoop for indoor lines" }</li>
                    <li>{ "A long-suffering pair of running shoes" }</li>
                </ul>
            </section>
        </main>
    }
}
