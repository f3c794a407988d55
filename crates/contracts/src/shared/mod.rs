pub mod api;
pub mod serde_lenient;
pub mod stream;
