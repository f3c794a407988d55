use crate::shared::serde_lenient::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Kind of income declared by the taxpayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    #[default]
    Salary,
    Business,
    Investment,
    DigitalAsset,
    Other,
}

impl IncomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeType::Salary => "salary",
            IncomeType::Business => "business",
            IncomeType::Investment => "investment",
            IncomeType::DigitalAsset => "digital_asset",
            IncomeType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncomeType::Salary => "Salary",
            IncomeType::Business => "Business",
            IncomeType::Investment => "Investment",
            IncomeType::DigitalAsset => "Digital Asset",
            IncomeType::Other => "Other",
        }
    }

    /// Unknown values fall back to `Salary`, the form default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "business" => IncomeType::Business,
            "investment" => IncomeType::Investment,
            "digital_asset" => IncomeType::DigitalAsset,
            "other" => IncomeType::Other,
            _ => IncomeType::Salary,
        }
    }

    pub fn all() -> [IncomeType; 5] {
        [
            IncomeType::Salary,
            IncomeType::Business,
            IncomeType::Investment,
            IncomeType::DigitalAsset,
            IncomeType::Other,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

/// Annual deduction amounts in NGN. Absent values are sent as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deductions {
    #[serde(deserialize_with = "null_as_default")]
    pub pension: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub nhf: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub nhis: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rent_paid: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub life_assurance: f64,
}

impl Deductions {
    pub fn any_positive(&self) -> bool {
        [
            self.pension,
            self.nhf,
            self.nhis,
            self.rent_paid,
            self.life_assurance,
        ]
        .iter()
        .any(|v| *v > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationRequest {
    pub income_sources: Vec<IncomeSource>,
    pub deductions: Deductions,
    pub is_informal_sector: bool,
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// A rate as the backend reports it: either a ready label ("7%") or a fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateLabel {
    Text(String),
    Fraction(f64),
}

impl fmt::Display for RateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateLabel::Text(s) => f.write_str(s),
            RateLabel::Fraction(v) => write!(f, "{:.0}%", v * 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandTax {
    pub band: String,
    pub rate: RateLabel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxCalculation {
    pub final_tax_payable: Option<f64>,
    pub breakdown: Vec<BandTax>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeductionSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
}

/// Tax computation result mirrored from the backend. Only displayed, never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxResult {
    pub regime: Option<String>,
    pub exemption: Option<String>,
    pub effective_rate: Option<RateLabel>,
    #[serde(deserialize_with = "null_as_default")]
    pub gross_income: f64,
    pub deductions: Option<DeductionSummary>,
    pub tax_calculation: Option<TaxCalculation>,
    pub tax_payable: Option<f64>,
    pub net_income: Option<f64>,
}

impl TaxResult {
    /// `taxCalculation.finalTaxPayable`, then `taxPayable`, then zero.
    pub fn payable(&self) -> f64 {
        self.tax_calculation
            .as_ref()
            .and_then(|c| c.final_tax_payable)
            .or(self.tax_payable)
            .unwrap_or(0.0)
    }

    /// Regime takes precedence over exemption when both are present.
    pub fn headline(&self) -> Option<&str> {
        self.regime.as_deref().or(self.exemption.as_deref())
    }

    pub fn breakdown(&self) -> &[BandTax] {
        self.tax_calculation
            .as_ref()
            .map(|c| c.breakdown.as_slice())
            .unwrap_or(&[])
    }
}

/// A result paired with the exact object the backend returned, so it can be
/// handed back (e.g. to `/api/ai/explain`) without dropping unmodelled fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedTax {
    pub result: TaxResult,
    pub raw: Value,
}

impl CalculatedTax {
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        let result = TaxResult::deserialize(&raw)?;
        Ok(Self { result, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let req = TaxCalculationRequest {
            income_sources: vec![IncomeSource {
                income_type: IncomeType::DigitalAsset,
                amount: 1_000_000.0,
                description: "digital_asset income".into(),
            }],
            deductions: Deductions {
                rent_paid: 600_000.0,
                ..Default::default()
            },
            is_informal_sector: false,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["incomeSources"][0]["type"], "digital_asset");
        assert_eq!(value["deductions"]["rentPaid"], 600_000.0);
        assert_eq!(value["deductions"]["lifeAssurance"], 0.0);
        assert_eq!(value["isInformalSector"], false);
    }

    #[test]
    fn test_result_payable_precedence() {
        let full: TaxResult = serde_json::from_value(json!({
            "grossIncome": 5_000_000,
            "taxPayable": 10,
            "taxCalculation": { "finalTaxPayable": 420_000, "breakdown": [
                { "band": "First 800,000", "rate": "0%", "tax": 0 },
                { "band": "Next 2,200,000", "rate": 0.15, "tax": 330_000 }
            ]},
            "netIncome": 4_580_000
        }))
        .unwrap();
        assert_eq!(full.payable(), 420_000.0);
        assert_eq!(full.breakdown().len(), 2);
        assert_eq!(full.breakdown()[1].rate.to_string(), "15%");

        let flat: TaxResult =
            serde_json::from_value(json!({ "grossIncome": 100, "taxPayable": 7 })).unwrap();
        assert_eq!(flat.payable(), 7.0);

        let empty: TaxResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.payable(), 0.0);
        assert!(empty.breakdown().is_empty());
    }

    #[test]
    fn test_headline_prefers_regime() {
        let result: TaxResult = serde_json::from_value(json!({
            "regime": "Presumptive Tax",
            "exemption": "Minimum wage earner",
            "effectiveRate": "1.5%"
        }))
        .unwrap();
        assert_eq!(result.headline(), Some("Presumptive Tax"));
        assert_eq!(result.effective_rate.unwrap().to_string(), "1.5%");
    }

    #[test]
    fn test_income_type_roundtrip_labels() {
        for t in IncomeType::all() {
            assert_eq!(IncomeType::from_str(t.as_str()), t);
        }
        assert_eq!(IncomeType::from_str("bogus"), IncomeType::Salary);
        assert_eq!(IncomeType::DigitalAsset.label(), "Digital Asset");
    }

    #[test]
    fn test_result_tolerates_nulls() {
        let result: TaxResult = serde_json::from_value(json!({
            "grossIncome": null,
            "taxPayable": 0,
            "deductions": { "total": null },
            "taxCalculation": { "breakdown": [ { "band": "First 800,000", "rate": "0%", "tax": null } ] }
        }))
        .unwrap();
        assert_eq!(result.gross_income, 0.0);
        assert_eq!(result.deductions.as_ref().unwrap().total, 0.0);
        assert_eq!(result.breakdown()[0].tax, 0.0);

        let deductions: Deductions =
            serde_json::from_value(json!({ "pension": null, "rentPaid": 500_000 })).unwrap();
        assert_eq!(deductions.pension, 0.0);
        assert_eq!(deductions.rent_paid, 500_000.0);
    }

    #[test]
    fn test_calculated_tax_keeps_raw_object() {
        let raw = json!({
            "grossIncome": 5_000_000,
            "reliefs": { "cra": 1_200_000 },
            "taxableIncome": 3_800_000,
            "taxPayable": 560_000
        });
        let calc = CalculatedTax::from_raw(raw.clone()).unwrap();
        assert_eq!(calc.result.payable(), 560_000.0);
        assert_eq!(calc.raw, raw);
        assert!(calc.raw.get("netIncome").is_none());

        assert!(CalculatedTax::from_raw(json!({ "grossIncome": "lots" })).is_err());
    }
}
