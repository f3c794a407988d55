pub mod analysis;
pub mod upload;

pub use analysis::{count_caption, DetectedData, DetectedIncome, ExtractedSummary, StatementAnalysis, TaxAdvisory};
pub use upload::{check_statement_file, size_in_mb, StatementKind, UploadRejection};
