//! Tax config - Model

use crate::shared::format::format_ngn;
use crate::shared::http::{get_json, ApiError};
use contracts::domain::tax::{BandRange, TaxBand, TaxConfig};
use contracts::shared::api::ApiEnvelope;

pub async fn fetch_config() -> Result<TaxConfig, ApiError> {
    let envelope: ApiEnvelope<TaxConfig> = get_json("/api/tax/config").await?;
    Ok(envelope.data)
}

pub fn band_caption(band: &TaxBand) -> String {
    match band.range() {
        BandRange::UpTo(max) => format!("Up to {}", format_ngn(max)),
        BandRange::Above(min) => format!("Above {}", format_ngn(min)),
        BandRange::Between(min, max) => format!("{} - {}", format_ngn(min), format_ngn(max)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_caption() {
        let first = TaxBand { min: 0.0, max: Some(800_000.0), rate: 0.0 };
        let middle = TaxBand { min: 800_000.0, max: Some(3_000_000.0), rate: 0.15 };
        let top = TaxBand { min: 50_000_000.0, max: None, rate: 0.25 };
        assert_eq!(band_caption(&first), "Up to ₦800,000");
        assert_eq!(band_caption(&middle), "₦800,000 - ₦3,000,000");
        assert_eq!(band_caption(&top), "Above ₦50,000,000");
    }
}
