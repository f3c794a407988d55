//! Tax calculator page (MVVM)
//!
//! - model.rs: form rows, request building and API calls
//! - view_model.rs: CalculatorVm with RwSignals and actions
//! - view.rs: CalculatorPage and result cards

mod model;
mod view;
mod view_model;

pub use view::CalculatorPage;
pub use view_model::CalculatorVm;
