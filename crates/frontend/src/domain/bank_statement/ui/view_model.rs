//! Bank statement - View Model

use super::model::{analyze_statement, stream_statement, AnalysisMode, ANALYZE_FAILED};
use crate::layout::ToastService;
use contracts::domain::bank_statement::{check_statement_file, StatementAnalysis, TaxAdvisory};
use contracts::domain::tax::TaxResult;
use contracts::shared::stream::{
    Completion, ProgressUpdate, StreamFailure, StreamHandler, StreamSessions, TextDelta,
    TextFragments,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

const ANALYZED: &str = "Bank statement analyzed successfully!";

#[derive(Clone, Copy)]
pub struct BankStatementVm {
    pub file: RwSignal<Option<File>, LocalStorage>,
    pub mode: RwSignal<AnalysisMode>,
    pub is_loading: RwSignal<bool>,
    /// True until the server reports `complete` or `error`.
    pub is_streaming: RwSignal<bool>,
    /// True until the read loop has returned, which can be after `complete`.
    pub is_reading: RwSignal<bool>,
    pub progress: RwSignal<Option<ProgressUpdate>>,
    pub progress_log: RwSignal<Vec<String>>,
    pub analysis: RwSignal<Option<StatementAnalysis>>,
    pub tax_estimate: RwSignal<Option<TaxResult>>,
    pub advisory: RwSignal<Option<TaxAdvisory>>,
    pub fragments: RwSignal<TextFragments>,
}

impl BankStatementVm {
    pub fn new() -> Self {
        Self {
            file: RwSignal::new_local(None),
            mode: RwSignal::new(AnalysisMode::default()),
            is_loading: RwSignal::new(false),
            is_streaming: RwSignal::new(false),
            is_reading: RwSignal::new(false),
            progress: RwSignal::new(None),
            progress_log: RwSignal::new(Vec::new()),
            analysis: RwSignal::new(None),
            tax_estimate: RwSignal::new(None),
            advisory: RwSignal::new(None),
            fragments: RwSignal::new(TextFragments::new()),
        }
    }

    /// No new upload, mode change or file removal while this holds.
    pub fn is_busy(&self) -> bool {
        self.is_loading.get() || self.is_reading.get()
    }

    pub fn has_results(&self) -> bool {
        self.analysis.with(Option::is_some)
            || self.tax_estimate.with(Option::is_some)
            || self.advisory.with(Option::is_some)
            || self.fragments.with(|f| !f.is_empty())
    }

    /// Streamed estimate first, otherwise the one embedded in the analysis.
    pub fn estimate(&self) -> Option<TaxResult> {
        self.tax_estimate
            .get()
            .or_else(|| self.analysis.with(|a| a.as_ref().and_then(|a| a.tax_estimate.clone())))
    }

    pub fn reset_results(&self) {
        self.progress.set(None);
        self.progress_log.set(Vec::new());
        self.analysis.set(None);
        self.tax_estimate.set(None);
        self.advisory.set(None);
        self.fragments.update(|f| f.clear());
    }

    pub fn select_file(&self, file: File, toasts: ToastService) {
        match check_statement_file(&file.name(), &file.type_(), file.size()) {
            Ok(kind) => {
                log::debug!("Selected {:?} statement {}", kind, file.name());
                self.file.set(Some(file));
                self.reset_results();
            }
            Err(rejection) => toasts.error(rejection.to_string()),
        }
    }

    pub fn remove_file(&self) {
        if self.is_busy_untracked() {
            return;
        }
        self.file.set(None);
        self.reset_results();
    }

    fn is_busy_untracked(&self) -> bool {
        self.is_loading.get_untracked() || self.is_reading.get_untracked()
    }

    pub fn analyze(&self, toasts: ToastService, sessions: StreamSessions) {
        if self.is_busy_untracked() {
            return;
        }
        let Some(file) = self.file.get_untracked() else {
            toasts.error("Please select a file");
            return;
        };

        let vm = *self;
        let ticket = sessions.begin();
        vm.reset_results();
        vm.is_loading.set(true);

        match vm.mode.get_untracked() {
            AnalysisMode::Live => {
                vm.is_streaming.set(true);
                vm.is_reading.set(true);
                spawn_local(async move {
                    let handler = StatementStreamHandler { vm, toasts };
                    let stats = stream_statement(&file, handler, ticket.clone()).await;
                    log::debug!("Statement stream finished: {:?}", stats);
                    if ticket.is_current() {
                        // The server may close without a `complete` event.
                        vm.is_streaming.set(false);
                        vm.is_loading.set(false);
                        vm.is_reading.set(false);
                    }
                });
            }
            AnalysisMode::Single => {
                spawn_local(async move {
                    let outcome = analyze_statement(&file).await;
                    if !ticket.is_current() {
                        return;
                    }
                    match outcome {
                        Ok(analysis) => {
                            vm.tax_estimate.set(analysis.tax_estimate.clone());
                            vm.analysis.set(Some(analysis));
                            toasts.success(ANALYZED);
                        }
                        Err(e) => {
                            log::error!("Statement analysis failed: {}", e);
                            toasts.error(e.user_message(ANALYZE_FAILED));
                        }
                    }
                    vm.is_loading.set(false);
                });
            }
        }
    }
}

impl Default for BankStatementVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes streamed events into the page signals.
struct StatementStreamHandler {
    vm: BankStatementVm,
    toasts: ToastService,
}

impl StreamHandler for StatementStreamHandler {
    fn on_progress(&mut self, update: ProgressUpdate) {
        if let Some(message) = update.message.clone() {
            self.vm.progress_log.update(|log| log.push(message));
        }
        self.vm.progress.set(Some(update));
    }

    fn on_analysis(&mut self, analysis: StatementAnalysis) {
        if analysis.tax_estimate.is_some() && self.vm.tax_estimate.with_untracked(Option::is_none) {
            self.vm.tax_estimate.set(analysis.tax_estimate.clone());
        }
        self.vm.analysis.set(Some(analysis));
    }

    fn on_tax_estimate(&mut self, estimate: TaxResult) {
        self.vm.tax_estimate.set(Some(estimate));
    }

    fn on_tax_advisory(&mut self, advisory: TaxAdvisory) {
        self.vm.advisory.set(Some(advisory));
    }

    fn on_text(&mut self, delta: TextDelta) {
        self.vm.fragments.update(|f| {
            f.apply(delta);
        });
    }

    fn on_complete(&mut self, completion: Completion) {
        self.vm.is_streaming.set(false);
        self.vm.is_loading.set(false);
        self.vm.progress.set(None);
        self.toasts
            .success(completion.message.unwrap_or_else(|| ANALYZED.to_string()));
    }

    fn on_error(&mut self, failure: StreamFailure) {
        self.vm.is_streaming.set(false);
        self.vm.is_loading.set(false);
        self.vm.progress.set(None);
        self.toasts.error(failure.reason().to_string());
    }
}
