//! Tax config - View Component

use super::model::band_caption;
use super::view_model::TaxConfigVm;
use crate::layout::use_toasts;
use crate::shared::components::{CardAnimated, CollapsibleSection, PageHeader};
use crate::shared::format::{format_ngn, format_percent};
use crate::shared::icons::icon;
use contracts::domain::tax::{ConfigSource, TaxConfig};
use leptos::prelude::*;
use thaw::*;

#[component]
fn SettingRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="setting-row">
            <span class="setting-row__label">{label}</span>
            <span class="setting-row__value">{value}</span>
        </div>
    }
}

#[component]
fn ConfigDetails(config: TaxConfig, on_refresh: Callback<()>) -> impl IntoView {
    let TaxConfig {
        config_name,
        source,
        tax_bands,
        reliefs,
        minimum_tax_rates,
        presumptive_tax_rate,
        minimum_wage_annual,
        digital_asset_ring_fencing,
    } = config;
    let source_icon = match source {
        ConfigSource::Database => "database",
        ConfigSource::Fallback => "file-text",
    };

    view! {
        <CardAnimated>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <span class=format!("config-source config-source--{}", String::from(source))>{icon(source_icon)}</span>
                    <div>
                        <h2 class="card__title">{config_name}</h2>
                        <p class="card__hint">{source.label()}</p>
                    </div>
                </Flex>
                <button class="icon-button" aria-label="Refresh" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                </button>
            </Flex>
        </CardAnimated>

        <CollapsibleSection title="Tax Bands">
            {tax_bands.iter().map(|band| view! {
                <div class="setting-row">
                    <span class="setting-row__label">{band_caption(band)}</span>
                    <span class="setting-row__value setting-row__value--accent">{format_percent(band.rate)}</span>
                </div>
            }).collect_view()}
        </CollapsibleSection>

        <CollapsibleSection title="Reliefs & Deductions">
            <SettingRow label="Fixed CRA" value=format_ngn(reliefs.fixed_cra) />
            <SettingRow label="CRA (% of Gross)" value=format_percent(reliefs.percent_gross_income_cra) />
            <SettingRow label="Rent Relief Cap" value=format_ngn(reliefs.rent_relief_cap) />
            <SettingRow label="Pension Cap" value=format_ngn(reliefs.pension_cap_fixed) />
            <SettingRow label="Life Assurance Cap" value=format_ngn(reliefs.life_assurance_cap) />
        </CollapsibleSection>

        <CollapsibleSection title="Other Settings">
            <SettingRow label="Minimum Tax (Gross)" value=format_percent(minimum_tax_rates.gross) />
            <SettingRow label="Presumptive Tax Rate" value=format_percent(presumptive_tax_rate) />
            <SettingRow label="Minimum Wage (Annual)" value=format_ngn(minimum_wage_annual) />
            <SettingRow
                label="Digital Asset Ring-Fencing"
                value=if digital_asset_ring_fencing { "Enabled".to_string() } else { "Disabled".to_string() }
            />
        </CollapsibleSection>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TaxConfigPage() -> impl IntoView {
    let vm = TaxConfigVm::new();
    let toasts = use_toasts();
    let reload = Callback::new(move |_: ()| vm.load(toasts));

    // Load once on mount.
    Effect::new(move |_| reload.run(()));

    view! {
        <div class="page tax-config">
            <PageHeader title="Tax Configuration" subtitle="Current tax rates and settings" icon_name="settings">
                {()}
            </PageHeader>

            {move || {
                let loading = vm.is_loading.get();
                match vm.config.get() {
                    Some(config) => view! { <ConfigDetails config=config on_refresh=reload /> }.into_any(),
                    None if loading => view! {
                        <CardAnimated class="empty-state">
                            <Spinner />
                            <p>"Loading configuration..."</p>
                        </CardAnimated>
                    }.into_any(),
                    None => view! {
                        <CardAnimated class="empty-state">
                            <p>"Failed to load configuration"</p>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload.run(())>
                                "Retry"
                            </Button>
                        </CardAnimated>
                    }.into_any(),
                }
            }}
        </div>
    }
}
