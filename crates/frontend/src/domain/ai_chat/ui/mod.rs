//! AI tax advisor chat (MVVM)
//!
//! - model.rs: chat request and canned texts
//! - view_model.rs: AiChatVm with RwSignals and the send action
//! - view.rs: AiChatPage

mod model;
mod view;
mod view_model;

pub use view::AiChatPage;
pub use view_model::AiChatVm;
