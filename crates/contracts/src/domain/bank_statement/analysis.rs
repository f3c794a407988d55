use crate::domain::tax::{Deductions, TaxResult};
use crate::shared::serde_lenient::null_as_default;
use serde::{Deserialize, Serialize};

/// Counters describing what the backend pulled out of the statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_transactions: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub income_sources_found: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub deductions_found: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub digital_asset_transactions: f64,
}

/// Counts arrive as JSON numbers of any shape; show them as whole numbers.
pub fn count_caption(count: f64) -> String {
    format!("{:.0}", count.max(0.0))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedIncome {
    /// Free-form: the backend may report kinds the calculator form never offers.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub income_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl DetectedIncome {
    /// "digital_asset" reads as "digital asset"; a blank type reads as "income".
    pub fn type_caption(&self) -> String {
        match self.income_type.trim() {
            "" => "income".to_string(),
            t => t.replace('_', " "),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectedData {
    pub income_sources: Vec<DetectedIncome>,
    pub deductions: Deductions,
}

/// Result of `POST /api/transactions/analyze-statement`, also carried by the
/// `analysis` stream event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatementAnalysis {
    pub extracted: ExtractedSummary,
    pub detected_data: DetectedData,
    pub tax_estimate: Option<TaxResult>,
    pub analysis_report: Vec<String>,
}

/// Advice produced for the detected figures (`taxAdvisory` stream event).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxAdvisory {
    #[serde(alias = "advice")]
    pub summary: Option<String>,
    #[serde(alias = "tips")]
    pub recommendations: Vec<String>,
    pub potential_savings: Option<f64>,
}

impl TaxAdvisory {
    pub fn is_empty(&self) -> bool {
        self.summary.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.recommendations.is_empty()
            && self.potential_savings.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statement_analysis_from_backend_json() {
        let analysis: StatementAnalysis = serde_json::from_value(json!({
            "extracted": {
                "totalTransactions": 142,
                "incomeSourcesFound": 2,
                "deductionsFound": 3
            },
            "detectedData": {
                "incomeSources": [
                    { "type": "salary", "amount": 4_800_000, "description": "ACME LTD payroll" },
                    { "type": "digital_asset", "amount": 250_000 }
                ],
                "deductions": { "pension": 384_000, "nhf": 0, "rentPaid": 1_200_000 }
            },
            "taxEstimate": {
                "grossIncome": 5_050_000,
                "taxCalculation": { "finalTaxPayable": 512_000 },
                "netIncome": 4_538_000
            },
            "analysisReport": ["Detected monthly salary credits", "Rent paid to landlord"]
        }))
        .unwrap();

        assert_eq!(analysis.extracted.total_transactions, 142.0);
        assert_eq!(analysis.extracted.digital_asset_transactions, 0.0);
        assert_eq!(analysis.detected_data.income_sources[1].type_caption(), "digital asset");
        assert_eq!(analysis.detected_data.deductions.rent_paid, 1_200_000.0);
        assert!(analysis.detected_data.deductions.any_positive());
        assert_eq!(analysis.tax_estimate.unwrap().payable(), 512_000.0);
        assert_eq!(analysis.analysis_report.len(), 2);
    }

    #[test]
    fn test_advisory_emptiness() {
        assert!(TaxAdvisory::default().is_empty());
        let advice: TaxAdvisory =
            serde_json::from_value(json!({ "advice": "Claim rent relief" })).unwrap();
        assert!(!advice.is_empty());
        assert_eq!(advice.summary.as_deref(), Some("Claim rent relief"));
    }

    #[test]
    fn test_unlisted_income_type_is_kept() {
        let analysis: StatementAnalysis = serde_json::from_value(json!({
            "detectedData": {
                "incomeSources": [
                    { "type": "rental", "amount": 1_200_000 },
                    { "type": "foreign_dividend", "amount": null },
                    { "type": null, "amount": 5 }
                ]
            }
        }))
        .unwrap();
        let sources = &analysis.detected_data.income_sources;
        assert_eq!(sources[0].income_type, "rental");
        assert_eq!(sources[0].type_caption(), "rental");
        assert_eq!(sources[1].type_caption(), "foreign dividend");
        assert_eq!(sources[1].amount, 0.0);
        assert_eq!(sources[2].type_caption(), "income");
    }

    #[test]
    fn test_counts_accept_floats_and_nulls() {
        let summary: ExtractedSummary = serde_json::from_value(json!({
            "totalTransactions": 3.0,
            "incomeSourcesFound": null,
            "deductionsFound": 2
        }))
        .unwrap();
        assert_eq!(count_caption(summary.total_transactions), "3");
        assert_eq!(count_caption(summary.income_sources_found), "0");
        assert_eq!(count_caption(summary.deductions_found), "2");
    }
}
