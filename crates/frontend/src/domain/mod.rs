pub mod ai_chat;
pub mod bank_statement;
pub mod calculator;
pub mod home;
pub mod tax_config;
