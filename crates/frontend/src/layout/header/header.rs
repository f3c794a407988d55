use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <A href="/" attr:class="header__brand">
                <span class="header__logo">{icon("calculator")}</span>
                <span class="header__text">
                    <span class="header__title">"Nigeria Tax Calculator"</span>
                    <span class="header__subtitle">"Tax Act 2025"</span>
                </span>
            </A>
            <div class="header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
