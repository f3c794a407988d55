//! Bank statement - View Component

use super::model::{detected_deductions, AnalysisMode};
use super::view_model::BankStatementVm;
use crate::layout::use_toasts;
use crate::shared::components::{CardAnimated, PageHeader, StatCard, StreamingText};
use crate::shared::format::format_ngn;
use crate::shared::icons::icon;
use contracts::domain::bank_statement::{count_caption, size_in_mb, StatementAnalysis, TaxAdvisory};
use contracts::domain::tax::TaxResult;
use contracts::shared::stream::StreamSessions;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
fn ModeSwitch(vm: BankStatementVm) -> impl IntoView {
    let option = move |mode: AnalysisMode| {
        view! {
            <button
                type="button"
                class=move || {
                    if vm.mode.get() == mode { "mode-switch__option mode-switch__option--active" } else { "mode-switch__option" }
                }
                disabled=move || vm.is_busy()
                on:click=move |_| vm.mode.set(mode)
            >
                {mode.label()}
            </button>
        }
    };

    view! {
        <div class="mode-switch" role="radiogroup">
            {option(AnalysisMode::Live)}
            {option(AnalysisMode::Single)}
        </div>
    }
}

#[component]
fn ProgressPanel(vm: BankStatementVm) -> impl IntoView {
    let percent = move || vm.progress.with(|p| p.as_ref().and_then(|p| p.percent));
    let message = move || {
        vm.progress
            .with(|p| p.as_ref().and_then(|p| p.message.clone().or_else(|| p.stage.clone())))
            .unwrap_or_else(|| "Analyzing statement...".to_string())
    };

    view! {
        <CardAnimated class="progress-panel">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Spinner />
                <span class="progress-panel__message">{message}</span>
            </Flex>
            {move || percent().map(|p| {
                let width = p.clamp(0.0, 100.0);
                view! {
                    <div class="progress-bar">
                        <div class="progress-bar__fill" style=format!("width: {:.0}%;", width)></div>
                    </div>
                }
            })}
            <ul class="progress-panel__log">
                {move || vm.progress_log.get().into_iter().map(|line| view! {
                    <li>{icon("check-circle")}<span>{line}</span></li>
                }).collect_view()}
            </ul>
        </CardAnimated>
    }
}

#[component]
fn SummaryCard(analysis: StatementAnalysis) -> impl IntoView {
    let e = analysis.extracted;
    view! {
        <CardAnimated>
            <h2 class="card__title">"Analysis Summary"</h2>
            <div class="results__stats results__stats--grid">
                <StatCard label="Transactions Found" icon_name="file-text" value=Signal::stored(count_caption(e.total_transactions)) />
                <StatCard label="Income Sources" icon_name="database" value=Signal::stored(count_caption(e.income_sources_found)) />
                <StatCard label="Deductions Found" icon_name="check-circle" value=Signal::stored(count_caption(e.deductions_found)) />
                <StatCard label="Crypto Transactions" icon_name="sparkles" value=Signal::stored(count_caption(e.digital_asset_transactions)) />
            </div>
        </CardAnimated>
    }
}

#[component]
fn DetectedCards(analysis: StatementAnalysis) -> impl IntoView {
    let incomes = analysis.detected_data.income_sources;
    let deductions = detected_deductions(&analysis.detected_data.deductions);
    let report = analysis.analysis_report;

    view! {
        {(!incomes.is_empty()).then(|| view! {
            <CardAnimated delay_ms=80>
                <h3 class="card__title">"Detected Income"</h3>
                <ul class="line-list">
                    {incomes.into_iter().map(|source| view! {
                        <li class="line-list__item">
                            <div>
                                <p class="line-list__label line-list__label--caps">{source.type_caption()}</p>
                                {source.description.clone().map(|d| view! { <p class="line-list__hint">{d}</p> })}
                            </div>
                            <span class="line-list__amount line-list__amount--income">{format_ngn(source.amount)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </CardAnimated>
        })}

        {(!deductions.is_empty()).then(|| view! {
            <CardAnimated delay_ms=120>
                <h3 class="card__title">"Detected Deductions"</h3>
                <ul class="line-list">
                    {deductions.into_iter().map(|(label, amount)| view! {
                        <li class="line-list__item">
                            <span class="line-list__label">{label}</span>
                            <span class="line-list__amount">{format_ngn(amount)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </CardAnimated>
        })}

        {(!report.is_empty()).then(|| view! {
            <CardAnimated delay_ms=160>
                <h3 class="card__title">"Analysis Report"</h3>
                <div class="report-list">
                    {report.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
            </CardAnimated>
        })}
    }
}

#[component]
fn EstimateCard(estimate: TaxResult) -> impl IntoView {
    let rate = estimate.effective_rate.as_ref().map(|r| r.to_string());
    let headline = estimate.headline().map(str::to_string);
    view! {
        <CardAnimated class="estimate-card">
            <h3 class="card__title">"Tax Estimate"</h3>
            {headline.map(|h| view! { <Badge appearance=BadgeAppearance::Tint>{h}</Badge> })}
            <ul class="line-list">
                <li class="line-list__item">
                    <span class="line-list__label">"Gross Income"</span>
                    <span class="line-list__amount">{format_ngn(estimate.gross_income)}</span>
                </li>
                <li class="line-list__item">
                    <span class="line-list__label">"Tax Payable"</span>
                    <span class="line-list__amount line-list__amount--accent">{format_ngn(estimate.payable())}</span>
                </li>
                {rate.map(|r| view! {
                    <li class="line-list__item">
                        <span class="line-list__label">"Effective Rate"</span>
                        <span class="line-list__amount">{r}</span>
                    </li>
                })}
                {estimate.net_income.map(|net| view! {
                    <li class="line-list__item line-list__item--total">
                        <span class="line-list__label">"Net Income"</span>
                        <span class="line-list__amount line-list__amount--income">{format_ngn(net)}</span>
                    </li>
                })}
            </ul>
        </CardAnimated>
    }
}

#[component]
fn AdvisoryCard(advisory: TaxAdvisory) -> impl IntoView {
    view! {
        <CardAnimated class="advisory-card">
            <h3 class="card__title">{icon("sparkles")}" Tax Advisory"</h3>
            {advisory.summary.clone().map(|s| view! {
                <StreamingText text=Signal::stored(s) class="advisory-card__summary" />
            })}
            {(!advisory.recommendations.is_empty()).then(|| view! {
                <ul class="advisory-card__tips">
                    {advisory.recommendations.iter().cloned().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                </ul>
            })}
            {advisory.potential_savings.filter(|v| *v > 0.0).map(|v| view! {
                <p class="advisory-card__savings">
                    "Potential savings: "<strong>{format_ngn(v)}</strong>
                </p>
            })}
        </CardAnimated>
    }
}

/// Streamed prose blocks, rendered in arrival order.
#[component]
fn FragmentList(vm: BankStatementVm) -> impl IntoView {
    view! {
        <For
            each=move || vm.fragments.with(|f| f.items().iter().map(|x| x.key()).collect::<Vec<_>>())
            key=|k| k.clone()
            let:key
        >
            {{
                let lookup = key.clone();
                let fragment = Memo::new(move |_| {
                    vm.fragments.with(|f| f.items().iter().find(|x| x.key() == lookup).cloned())
                });
                let text = Signal::derive(move || fragment.with(|f| f.as_ref().map(|f| f.text.clone()).unwrap_or_default()));
                let streaming = Signal::derive(move || fragment.with(|f| f.as_ref().is_some_and(|f| !f.is_complete)));
                let title = fragment.with_untracked(|f| f.as_ref().and_then(|f| f.title.clone()));
                view! {
                    <CardAnimated class="fragment-card">
                        {title.map(|t| view! { <h3 class="card__title">{t}</h3> })}
                        <StreamingText text=text is_streaming=streaming />
                    </CardAnimated>
                }
            }}
        </For>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BankStatementPage() -> impl IntoView {
    let vm = BankStatementVm::new();
    let toasts = use_toasts();
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Read loops stop once the page is gone.
    let sessions = StreamSessions::new();
    on_cleanup({
        let sessions = sessions.clone();
        move || sessions.cancel_all()
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.select_file(file, toasts);
        }
    };

    let remove_file = move |_| {
        vm.remove_file();
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    let file_caption = move || {
        vm.file.with(|f| f.as_ref().map(|f| (f.name(), size_in_mb(f.size()))))
    };

    view! {
        <div class="page bank-statement">
            <PageHeader
                title="Bank Statement Analysis"
                subtitle="Upload your bank statement (PDF or CSV) and automatically detect income sources and deductions"
                icon_name="file-text"
            >
                {()}
            </PageHeader>

            <div class="two-column">
                <div class="two-column__side">
                    <CardAnimated>
                        <h2 class="card__title">"Upload Statement"</h2>
                        <label class="dropzone" for="statement-upload">
                            <input
                                node_ref=file_input
                                type="file"
                                accept=".pdf,.csv"
                                id="statement-upload"
                                class="dropzone__input"
                                disabled=move || vm.is_busy()
                                on:change=on_file_change
                            />
                            {move || match file_caption() {
                                Some((name, size)) => view! {
                                    <div class="dropzone__content dropzone__content--ready">
                                        {icon("check-circle")}
                                        <p class="dropzone__title">{name}</p>
                                        <p class="dropzone__hint">{size}</p>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div class="dropzone__content">
                                        {icon("upload")}
                                        <p class="dropzone__title">"Click to upload"</p>
                                        <p class="dropzone__hint">"PDF or CSV (max 10MB)"</p>
                                    </div>
                                }.into_any(),
                            }}
                        </label>

                        <Show when=move || vm.file.with(Option::is_some)>
                            <button
                                class="link-button link-button--danger"
                                disabled=move || vm.is_busy()
                                on:click=remove_file
                            >
                                "Remove file"
                            </button>
                        </Show>

                        <ModeSwitch vm=vm />

                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.is_busy() || vm.file.with(Option::is_none))
                            on_click={
                                let sessions = sessions.clone();
                                move |_| vm.analyze(toasts, sessions.clone())
                            }
                            class="bank-statement__submit"
                        >
                            {move || if vm.is_loading.get() {
                                view! { <Spinner size=SpinnerSize::Tiny />" Analyzing..." }.into_any()
                            } else {
                                view! { {icon("file-text")}" Analyze Statement" }.into_any()
                            }}
                        </Button>
                    </CardAnimated>

                    <CardAnimated class="info-card" delay_ms=80>
                        <Flex align=FlexAlign::Start gap=FlexGap::Small>
                            {icon("alert-circle")}
                            <div>
                                <p class="info-card__title">"How it works:"</p>
                                <ul class="info-card__list">
                                    <li>"AI extracts transactions from your statement"</li>
                                    <li>"Automatically categorizes income and deductions"</li>
                                    <li>"Detects pension, NHF, NHIS, rent payments"</li>
                                    <li>"Identifies digital asset transactions (ring-fenced)"</li>
                                    <li>"Calculates your tax liability"</li>
                                </ul>
                            </div>
                        </Flex>
                    </CardAnimated>
                </div>

                <div class="two-column__main">
                    <Show when=move || vm.is_loading.get()>
                        <ProgressPanel vm=vm />
                    </Show>

                    {move || vm.analysis.get().map(|a| view! { <SummaryCard analysis=a /> })}
                    {move || vm.estimate().map(|e| view! { <EstimateCard estimate=e /> })}
                    {move || vm.analysis.get().map(|a| view! { <DetectedCards analysis=a /> })}
                    {move || vm.advisory.get().filter(|a| !a.is_empty()).map(|a| view! { <AdvisoryCard advisory=a /> })}
                    <FragmentList vm=vm />

                    <Show when=move || !vm.is_loading.get() && !vm.has_results()>
                        <CardAnimated class="empty-state">
                            {icon("file-text")}
                            <p>"Upload a bank statement to get started"</p>
                        </CardAnimated>
                    </Show>
                </div>
            </div>
        </div>
    }
}
