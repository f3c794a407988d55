use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="app-footer">
            <span>"© 2025 Nigeria Tax Calculator. Based on Nigeria Tax Act 2025."</span>
        </footer>
    }
}
