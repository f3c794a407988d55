//! Calculator - Model (form state and API functions)

use crate::shared::http::{post_json, ApiError};
use contracts::domain::ai_chat::{AiReply, ExplainRequest, QuestionRequest};
use contracts::domain::tax::{CalculatedTax, Deductions, IncomeSource, IncomeType, TaxCalculationRequest};
use contracts::shared::api::ApiEnvelope;
use serde_json::Value;

pub const NO_INCOME_MESSAGE: &str = "Please add at least one income source";

/// One editable income row. Amounts stay as typed until the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeRow {
    pub id: u64,
    pub income_type: IncomeType,
    pub amount: String,
    pub description: String,
}

impl IncomeRow {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            income_type: IncomeType::Salary,
            amount: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeductionInputs {
    pub pension: String,
    pub nhf: String,
    pub nhis: String,
    pub rent_paid: String,
    pub life_assurance: String,
}

/// Blank, unparsable and non-finite input all count as zero.
fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Turns the form into a request. Rows without a positive amount are
/// dropped; an empty description becomes "<type> income".
pub fn build_request(
    rows: &[IncomeRow],
    deductions: &DeductionInputs,
    is_informal_sector: bool,
) -> Result<TaxCalculationRequest, &'static str> {
    let income_sources: Vec<IncomeSource> = rows
        .iter()
        .filter_map(|row| {
            let amount = parse_amount(&row.amount);
            if amount <= 0.0 {
                return None;
            }
            let description = match row.description.trim() {
                "" => format!("{} income", row.income_type.as_str()),
                d => d.to_string(),
            };
            Some(IncomeSource {
                income_type: row.income_type,
                amount,
                description,
            })
        })
        .collect();

    if income_sources.is_empty() {
        return Err(NO_INCOME_MESSAGE);
    }

    Ok(TaxCalculationRequest {
        income_sources,
        deductions: Deductions {
            pension: parse_amount(&deductions.pension),
            nhf: parse_amount(&deductions.nhf),
            nhis: parse_amount(&deductions.nhis),
            rent_paid: parse_amount(&deductions.rent_paid),
            life_assurance: parse_amount(&deductions.life_assurance),
        },
        is_informal_sector,
    })
}

pub async fn calculate_tax(request: &TaxCalculationRequest) -> Result<CalculatedTax, ApiError> {
    let envelope: ApiEnvelope<Value> = post_json("/api/tax/calculate", request).await?;
    CalculatedTax::from_raw(envelope.data)
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

/// The backend's own result object goes back unchanged.
pub fn explain_request(calculation: &CalculatedTax) -> ExplainRequest {
    ExplainRequest {
        calculation_result: calculation.raw.clone(),
    }
}

/// Plain-language explanation of a result from the AI advisor.
pub async fn explain_result(calculation: &CalculatedTax) -> Result<String, ApiError> {
    let envelope: ApiEnvelope<AiReply> =
        post_json("/api/ai/explain", &explain_request(calculation)).await?;
    Ok(envelope.data.response)
}

pub async fn ask_question(question: &str) -> Result<String, ApiError> {
    let request = QuestionRequest {
        question: question.to_string(),
    };
    let envelope: ApiEnvelope<AiReply> = post_json("/api/ai/question", &request).await?;
    Ok(envelope.data.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, income_type: IncomeType, amount: &str, description: &str) -> IncomeRow {
        IncomeRow {
            id,
            income_type,
            amount: amount.into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_build_request_filters_and_defaults() {
        let rows = vec![
            row(1, IncomeType::Salary, "6000000", ""),
            row(2, IncomeType::Business, "0", "side gig"),
            row(3, IncomeType::DigitalAsset, " 250000.5 ", "BTC sale"),
            row(4, IncomeType::Other, "abc", ""),
        ];
        let deductions = DeductionInputs {
            pension: "480000".into(),
            rent_paid: "1200000".into(),
            ..Default::default()
        };

        let request = build_request(&rows, &deductions, false).unwrap();
        assert_eq!(request.income_sources.len(), 2);
        assert_eq!(request.income_sources[0].description, "salary income");
        assert_eq!(request.income_sources[1].amount, 250000.5);
        assert_eq!(request.income_sources[1].description, "BTC sale");
        assert_eq!(request.deductions.pension, 480000.0);
        assert_eq!(request.deductions.rent_paid, 1200000.0);
        assert_eq!(request.deductions.nhf, 0.0);
        assert!(!request.is_informal_sector);
    }

    #[test]
    fn test_build_request_requires_positive_income() {
        let rows = vec![row(1, IncomeType::Salary, "", ""), row(2, IncomeType::Salary, "-5", "")];
        assert_eq!(
            build_request(&rows, &DeductionInputs::default(), true),
            Err(NO_INCOME_MESSAGE)
        );
    }

    #[test]
    fn test_request_wire_shape() {
        let rows = vec![row(1, IncomeType::DigitalAsset, "1000", "")];
        let request = build_request(&rows, &DeductionInputs::default(), true).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["incomeSources"][0]["type"], "digital_asset");
        assert_eq!(value["incomeSources"][0]["description"], "digital_asset income");
        assert_eq!(value["deductions"]["lifeAssurance"], 0.0);
        assert_eq!(value["isInformalSector"], true);
    }

    #[test]
    fn test_explain_sends_backend_result_unchanged() {
        let raw = serde_json::json!({
            "grossIncome": 5_000_000,
            "reliefs": { "cra": 1_200_000 },
            "taxableIncome": 3_800_000,
            "taxPayable": 560_000
        });
        let calculation = CalculatedTax::from_raw(raw.clone()).unwrap();
        let body = serde_json::to_value(explain_request(&calculation)).unwrap();

        assert_eq!(body["calculationResult"], raw);
        assert!(body["calculationResult"].get("netIncome").is_none());
    }
}
