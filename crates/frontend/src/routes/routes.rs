use crate::domain::ai_chat::ui::AiChatPage;
use crate::domain::bank_statement::ui::BankStatementPage;
use crate::domain::calculator::ui::CalculatorPage;
use crate::domain::home::ui::HomePage;
use crate::domain::tax_config::ui::TaxConfigPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h2>"Page not found"</h2>
            <a href="/">"Back to home"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/calculator") view=CalculatorPage />
            <Route path=path!("/bank-statement") view=BankStatementPage />
            <Route path=path!("/ai-chat") view=AiChatPage />
            <Route path=path!("/config") view=TaxConfigPage />
        </Routes>
    }
}
