//! Navigation Bar Component
//!
//! Static header with logo and title.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let (title, logo_src) = ctx.config.with_value(|config| (config.title.clone(), config.logo_src.clone()));

    view! {
        <nav class="nav">
            <a href="#" class="nav__brand">
                <img src=logo_src alt="Logo" class="logo" />
                <span class="nav__title">{title}</span>
            </a>
        </nav>
    }
}
