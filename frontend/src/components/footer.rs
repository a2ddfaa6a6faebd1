use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, VisitorStats};
use crate::config::SITE_LABEL;

/// Site footer with the visitor counters. The counters are decoration; if
/// the stats call fails the footer simply renders without them.
#[function_component(Footer)]
pub fn footer() -> Html {
    let stats = use_state(|| None::<VisitorStats>);
    let alive = use_mut_ref(|| true);

    {
        let stats = stats.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            let alive_for_cleanup = alive.clone();
            spawn_local(async move {
                let fetched = api::fetch_visitor_stats().await;
                if *alive.borrow() {
                    stats.set(fetched);
                }
            });
            move || {
                *alive_for_cleanup.borrow_mut() = false;
            }
        });
    }

    html! {
        <footer class={classes!("site-footer")}>
            {
                match stats.as_ref() {
                    Some(stats) => html! {
                        <p class={classes!("visitor-stats")}>
                            { format!("Today {} · Total {}", stats.today_visitors, stats.total_visitors) }
                        </p>
                    },
                    None => html! {},
                }
            }
            <p class={classes!("site-copyright")}>
                { format!("© 2024 {SITE_LABEL}") }
            </p>
        </footer>
    }
}
