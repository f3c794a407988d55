//! Calculator - View Component

use super::model::IncomeRow;
use super::view_model::CalculatorVm;
use crate::layout::use_toasts;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::components::{CardAnimated, CollapsibleSection, PageHeader, StatCard, StreamingText};
use crate::shared::format::format_ngn;
use crate::shared::icons::icon;
use contracts::domain::tax::{IncomeType, TaxResult};
use leptos::prelude::*;
use thaw::*;

fn income_type_options() -> Vec<(&'static str, &'static str)> {
    IncomeType::all().iter().map(|t| (t.as_str(), t.label())).collect()
}

/// Reactive read of one field of the row with `id`.
fn row_field<T: Default + 'static>(
    vm: CalculatorVm,
    id: u64,
    read: fn(&IncomeRow) -> T,
) -> Signal<T>
where
    T: Send + Sync,
{
    Signal::derive(move || {
        vm.rows
            .with(|rows| rows.iter().find(|r| r.id == id).map(read))
            .unwrap_or_default()
    })
}

#[component]
fn IncomeRowEditor(vm: CalculatorVm, id: u64) -> impl IntoView {
    let position = move || {
        vm.rows
            .with(|rows| rows.iter().position(|r| r.id == id))
            .map(|i| i + 1)
            .unwrap_or(0)
    };
    let can_remove = move || vm.rows.with(|rows| rows.len() > 1);

    view! {
        <div class="income-row">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <span class="income-row__caption">{move || format!("Source {}", position())}</span>
                <Show when=can_remove>
                    <button
                        class="income-row__remove"
                        aria-label="Remove income source"
                        on:click=move |_| vm.remove_row(id)
                    >
                        {icon("trash")}
                    </button>
                </Show>
            </Flex>
            <Select
                value=row_field(vm, id, |r| r.income_type.as_str().to_string())
                options=income_type_options()
                on_change=Callback::new(move |v: String| vm.set_row_type(id, &v))
            />
            <Input
                input_type="number"
                placeholder="Amount (NGN)"
                value=row_field(vm, id, |r| r.amount.clone())
                on_input=Callback::new(move |v: String| vm.update_row(id, |r| r.amount = v))
            />
            <Input
                placeholder="Description (optional)"
                value=row_field(vm, id, |r| r.description.clone())
                on_input=Callback::new(move |v: String| vm.update_row(id, |r| r.description = v))
            />
        </div>
    }
}

/// Number field bound to one entry of the deductions form.
#[component]
fn DeductionField(
    vm: CalculatorVm,
    label: &'static str,
    read: fn(&super::model::DeductionInputs) -> String,
    write: fn(&mut super::model::DeductionInputs, String),
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Input
            label=label
            input_type="number"
            placeholder="0"
            hint=hint.map(str::to_string)
            value=Signal::derive(move || vm.deductions.with(read))
            on_input=Callback::new(move |v: String| vm.deductions.update(|d| write(d, v)))
        />
    }
}

#[component]
fn ResultView(vm: CalculatorVm, result: TaxResult) -> impl IntoView {
    let toasts = use_toasts();
    let headline = result.headline().map(str::to_string);
    let rate = result.effective_rate.as_ref().map(|r| r.to_string());
    let breakdown = result.breakdown().to_vec();
    let deductions_total = result.deductions.as_ref().map(|d| d.total);
    let net_income = result.net_income;
    let gross = format_ngn(result.gross_income);
    let payable = format_ngn(result.payable());

    view! {
        <div id="results" class="results">
            <CardAnimated class="results__summary">
                {headline.map(|h| view! {
                    <div class="results__regime">
                        <p class="results__regime-name">{h}</p>
                        {rate.clone().map(|r| view! { <p class="results__rate">{format!("Rate: {}", r)}</p> })}
                    </div>
                })}
                <div class="results__stats">
                    <StatCard label="Gross Income" icon_name="database" value=Signal::stored(gross) />
                    {deductions_total.map(|total| view! {
                        <StatCard label="Deductions" icon_name="file-text" value=Signal::stored(format_ngn(total)) />
                    })}
                    <StatCard label="Tax Payable" icon_name="calculator" value=Signal::stored(payable) accent=true />
                    {net_income.map(|net| view! {
                        <StatCard label="Net Income" icon_name="check-circle" value=Signal::stored(format_ngn(net)) />
                    })}
                </div>
            </CardAnimated>

            {(!breakdown.is_empty()).then(|| view! {
                <CardAnimated delay_ms=80>
                    <h3 class="card__title">"Tax Breakdown"</h3>
                    <table class="band-table">
                        <tbody>
                            {breakdown.into_iter().map(|band| view! {
                                <tr>
                                    <td>
                                        {band.band}
                                        <span class="band-table__rate">{format!(" ({})", band.rate)}</span>
                                    </td>
                                    <td class="band-table__amount">{format_ngn(band.tax)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </CardAnimated>
            })}

            <CardAnimated delay_ms=160 class="explain-card">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 class="card__title">{icon("sparkles")}" AI explanation"</h3>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=vm.is_explaining
                        on_click=move |_| vm.explain(toasts)
                    >
                        {move || if vm.is_explaining.get() { "Explaining..." } else { "Explain this result" }}
                    </Button>
                </Flex>
                <Show when=move || vm.is_explaining.get()>
                    <Spinner />
                </Show>
                {move || vm.explanation.get().map(|text| view! {
                    <StreamingText text=Signal::stored(text) class="explain-card__text" />
                })}

                <div class="explain-card__ask">
                    <Input
                        placeholder="Ask a follow-up question about your tax..."
                        value=vm.question
                        on_input=Callback::new(move |v: String| vm.question.set(v))
                        disabled=vm.is_asking
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=vm.is_asking
                        on_click=move |_| vm.ask(toasts)
                    >
                        {icon("send")}
                    </Button>
                </div>
                {move || vm.answer.get().map(|text| view! {
                    <StreamingText text=Signal::stored(text) class="explain-card__text" />
                })}
            </CardAnimated>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CalculatorPage() -> impl IntoView {
    let vm = CalculatorVm::new();
    let toasts = use_toasts();

    view! {
        <div class="page calculator">
            <PageHeader title="Tax Calculator" subtitle="Enter your income and deductions" icon_name="calculator">
                {()}
            </PageHeader>

            <CardAnimated>
                <h2 class="card__title">"Income Sources"</h2>
                <For
                    each=move || vm.rows.get()
                    key=|row| row.id
                    let:row
                >
                    <IncomeRowEditor vm=vm id=row.id />
                </For>
                <button class="dashed-button" on:click=move |_| vm.add_row()>
                    {icon("plus")}
                    " Add Income Source"
                </button>
            </CardAnimated>

            <CollapsibleSection title="Deductions">
                <DeductionField vm=vm label="Pension" read=|d| d.pension.clone() write=|d, v| d.pension = v />
                <DeductionField vm=vm label="NHF" read=|d| d.nhf.clone() write=|d, v| d.nhf = v />
                <DeductionField vm=vm label="NHIS" read=|d| d.nhis.clone() write=|d, v| d.nhis = v />
                <DeductionField
                    vm=vm
                    label="Rent Paid (Annual)"
                    hint="20% relief, max ₦500k"
                    read=|d| d.rent_paid.clone()
                    write=|d, v| d.rent_paid = v
                />
                <DeductionField
                    vm=vm
                    label="Life Assurance"
                    read=|d| d.life_assurance.clone()
                    write=|d, v| d.life_assurance = v
                />
            </CollapsibleSection>

            <CardAnimated>
                <Checkbox
                    id="informal-sector"
                    label="Presumptive Tax (Informal Sector)"
                    hint="Use the simplified presumptive regime for informal-sector earners"
                    checked=vm.is_informal_sector
                    on_change=Callback::new(move |v: bool| vm.is_informal_sector.set(v))
                />
            </CardAnimated>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=vm.is_loading
                on_click=move |_| vm.calculate(toasts)
                class="calculator__submit"
            >
                {icon("calculator")}
                {move || if vm.is_loading.get() { " Calculating..." } else { " Calculate Tax" }}
            </Button>

            {move || vm.result.get().map(|calculation| view! { <ResultView vm=vm result=calculation.result /> })}
        </div>
    }
}
