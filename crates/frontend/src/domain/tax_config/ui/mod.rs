//! Tax configuration viewer (MVVM)

mod model;
mod view;
mod view_model;

pub use view::TaxConfigPage;
pub use view_model::TaxConfigVm;
