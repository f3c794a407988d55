pub mod footer;
pub mod header;
pub mod toast_service;

pub use toast_service::{use_toasts, ToastHost, ToastService};

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   Header (brand, theme toggle)           |
/// +------------------------------------------+
/// |   Navbar                                 |
/// +------------------------------------------+
/// |   Content                                |
/// +------------------------------------------+
/// |   Footer                                 |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <header::Navbar />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
