//! Bank statement analysis page (MVVM)
//!
//! - model.rs: upload requests and the live stream driver
//! - view_model.rs: BankStatementVm and the stream handler feeding it
//! - view.rs: BankStatementPage and the result cards

mod model;
mod view;
mod view_model;

pub use view::BankStatementPage;
pub use view_model::BankStatementVm;
