use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str, &str, &str); 3] = [
    (
        "/calculator",
        "calculator",
        "Tax Calculator",
        "Enter your income sources and deductions to see your personal income tax under the 2025 bands.",
    ),
    (
        "/bank-statement",
        "file-text",
        "Bank Statement Analysis",
        "Upload a PDF or CSV statement and watch income, deductions and a tax estimate appear as it is analysed.",
    ),
    (
        "/ai-chat",
        "message-square",
        "AI Tax Advisor",
        "Ask questions about reliefs, exemptions and filing in plain language.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <section class="home__hero">
                <h1 class="home__title">"Nigeria Personal Income Tax, made simple"</h1>
                <p class="home__lead">
                    "Estimate what you owe under the Nigeria Tax Act 2025, analyse your bank statements and get answers from an AI advisor."
                </p>
                <A href="/calculator" attr:class="button button--primary home__cta">
                    <span>"Start Calculating"</span>
                    {icon("arrow-right")}
                </A>
            </section>

            <section class="home__features">
                {FEATURES
                    .into_iter()
                    .enumerate()
                    .map(|(i, (href, icon_name, title, text))| {
                        view! {
                            <CardAnimated delay_ms=(i as u32) * 80 class="feature-card">
                                <A href=href attr:class="feature-card__link">
                                    <div class="feature-card__icon">{icon(icon_name)}</div>
                                    <h3 class="feature-card__title">{title}</h3>
                                    <p class="feature-card__text">{text}</p>
                                </A>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
