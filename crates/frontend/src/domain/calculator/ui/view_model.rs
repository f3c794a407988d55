//! Calculator - View Model

use super::model::{ask_question, build_request, calculate_tax, explain_result, DeductionInputs, IncomeRow};
use crate::layout::ToastService;
use contracts::domain::tax::{CalculatedTax, IncomeType};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct CalculatorVm {
    pub rows: RwSignal<Vec<IncomeRow>>,
    next_row_id: StoredValue<u64>,
    pub deductions: RwSignal<DeductionInputs>,
    pub is_informal_sector: RwSignal<bool>,
    pub is_loading: RwSignal<bool>,
    pub result: RwSignal<Option<CalculatedTax>>,
    pub explanation: RwSignal<Option<String>>,
    pub is_explaining: RwSignal<bool>,
    pub question: RwSignal<String>,
    pub answer: RwSignal<Option<String>>,
    pub is_asking: RwSignal<bool>,
}

impl CalculatorVm {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(vec![IncomeRow::new(0)]),
            next_row_id: StoredValue::new(1),
            deductions: RwSignal::new(DeductionInputs::default()),
            is_informal_sector: RwSignal::new(false),
            is_loading: RwSignal::new(false),
            result: RwSignal::new(None),
            explanation: RwSignal::new(None),
            is_explaining: RwSignal::new(false),
            question: RwSignal::new(String::new()),
            answer: RwSignal::new(None),
            is_asking: RwSignal::new(false),
        }
    }

    pub fn add_row(&self) {
        let id = self.next_row_id.get_value();
        self.next_row_id.set_value(id + 1);
        self.rows.update(|rows| rows.push(IncomeRow::new(id)));
    }

    /// The last remaining row cannot be removed.
    pub fn remove_row(&self, id: u64) {
        self.rows.update(|rows| {
            if rows.len() > 1 {
                rows.retain(|r| r.id != id);
            }
        });
    }

    pub fn update_row(&self, id: u64, edit: impl FnOnce(&mut IncomeRow)) {
        self.rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                edit(row);
            }
        });
    }

    pub fn set_row_type(&self, id: u64, value: &str) {
        let income_type = IncomeType::from_str(value);
        self.update_row(id, |row| row.income_type = income_type);
    }

    pub fn calculate(&self, toasts: ToastService) {
        if self.is_loading.get_untracked() {
            return;
        }
        let request = match build_request(
            &self.rows.get_untracked(),
            &self.deductions.get_untracked(),
            self.is_informal_sector.get_untracked(),
        ) {
            Ok(r) => r,
            Err(msg) => {
                toasts.error(msg);
                return;
            }
        };

        let vm = *self;
        vm.is_loading.set(true);
        spawn_local(async move {
            match calculate_tax(&request).await {
                Ok(calculation) => {
                    vm.result.set(Some(calculation));
                    vm.explanation.set(None);
                    vm.answer.set(None);
                    toasts.success("Tax calculated!");
                    Timeout::new(100, scroll_to_results).forget();
                }
                Err(e) => {
                    log::error!("Tax calculation failed: {}", e);
                    toasts.error(e.user_message("Failed to calculate tax"));
                }
            }
            vm.is_loading.set(false);
        });
    }

    pub fn explain(&self, toasts: ToastService) {
        let Some(calculation) = self.result.get_untracked() else {
            return;
        };
        if self.is_explaining.get_untracked() {
            return;
        }

        let vm = *self;
        vm.is_explaining.set(true);
        spawn_local(async move {
            match explain_result(&calculation).await {
                Ok(text) => vm.explanation.set(Some(text)),
                Err(e) => {
                    log::error!("Explain request failed: {}", e);
                    toasts.error(e.user_message("Failed to get explanation"));
                }
            }
            vm.is_explaining.set(false);
        });
    }

    pub fn ask(&self, toasts: ToastService) {
        let question = self.question.get_untracked().trim().to_string();
        if question.is_empty() || self.is_asking.get_untracked() {
            return;
        }

        let vm = *self;
        vm.is_asking.set(true);
        spawn_local(async move {
            match ask_question(&question).await {
                Ok(text) => {
                    vm.answer.set(Some(text));
                    vm.question.set(String::new());
                }
                Err(e) => {
                    log::error!("Question request failed: {}", e);
                    toasts.error(e.user_message("Failed to get an answer"));
                }
            }
            vm.is_asking.set(false);
        });
    }
}

impl Default for CalculatorVm {
    fn default() -> Self {
        Self::new()
    }
}

fn scroll_to_results() {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("results"))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
