use thiserror::Error;

/// Largest statement the backend accepts.
pub const MAX_STATEMENT_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Multipart field name expected by both analysis endpoints.
pub const STATEMENT_FIELD: &str = "statement";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Pdf,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadRejection {
    #[error("Please upload a PDF or CSV file")]
    UnsupportedType,
    #[error("File is larger than 10 MB")]
    TooLarge,
}

/// Client-side pre-check of a picked file. The backend validates again.
pub fn check_statement_file(
    name: &str,
    mime: &str,
    size_bytes: f64,
) -> Result<StatementKind, UploadRejection> {
    let kind = if mime == "application/pdf" {
        StatementKind::Pdf
    } else if mime == "text/csv" || name.to_ascii_lowercase().ends_with(".csv") {
        StatementKind::Csv
    } else {
        return Err(UploadRejection::UnsupportedType);
    };

    if size_bytes > MAX_STATEMENT_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(kind)
}

/// Size in MB with two decimals, as shown under the file name.
pub fn size_in_mb(size_bytes: f64) -> String {
    format!("{:.2} MB", size_bytes / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_and_csv() {
        assert_eq!(
            check_statement_file("gtb.pdf", "application/pdf", 1024.0),
            Ok(StatementKind::Pdf)
        );
        assert_eq!(
            check_statement_file("export.csv", "text/csv", 1024.0),
            Ok(StatementKind::Csv)
        );
        // Some browsers report CSV as vnd.ms-excel or an empty type.
        assert_eq!(
            check_statement_file("EXPORT.CSV", "", 1024.0),
            Ok(StatementKind::Csv)
        );
    }

    #[test]
    fn test_rejects_other_types_and_large_files() {
        assert_eq!(
            check_statement_file("scan.png", "image/png", 10.0),
            Err(UploadRejection::UnsupportedType)
        );
        assert_eq!(
            check_statement_file("big.pdf", "application/pdf", MAX_STATEMENT_BYTES + 1.0),
            Err(UploadRejection::TooLarge)
        );
        assert_eq!(
            UploadRejection::UnsupportedType.to_string(),
            "Please upload a PDF or CSV file"
        );
    }

    #[test]
    fn test_size_in_mb() {
        assert_eq!(size_in_mb(1_572_864.0), "1.50 MB");
        assert_eq!(size_in_mb(0.0), "0.00 MB");
    }
}
