pub mod card_animated;
pub mod collapsible_section;
pub mod page_header;
pub mod stat_card;
pub mod streaming_text;
pub mod ui;

pub use card_animated::CardAnimated;
pub use collapsible_section::CollapsibleSection;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use streaming_text::StreamingText;
