//! Personal portfolio/blog single-page application.

mod api;
mod auth_context;
mod components;
mod config;
mod filter;
pub mod hooks;
mod likes;
mod models;
mod pages;
mod retry;
mod router;
mod storage;
mod theme_context;
mod utils;

use yew::prelude::*;

use crate::auth_context::AuthProvider;
use crate::theme_context::ThemeProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <AuthProvider>
                <router::AppRouter />
            </AuthProvider>
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
