use crate::layout::{Shell, ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notifications are shared by every page.
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <ThemeProvider>
                <Router>
                    <Shell>
                        <AppRoutes />
                    </Shell>
                </Router>
                <ToastHost />
            </ThemeProvider>
        </ConfigProvider>
    }
}
