use serde::{Deserialize, Serialize};

/// One progressive band. `max` is `None` for the open-ended top band
/// (the backend serialises an infinite upper bound as `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBand {
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
    pub rate: f64,
}

/// How a band's bounds read on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandRange {
    UpTo(f64),
    Above(f64),
    Between(f64, f64),
}

impl TaxBand {
    pub fn range(&self) -> BandRange {
        match self.max.filter(|m| m.is_finite()) {
            Some(max) if self.min == 0.0 => BandRange::UpTo(max),
            Some(max) => BandRange::Between(self.min, max),
            // No ceiling wins over a zero floor.
            None => BandRange::Above(self.min),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reliefs {
    #[serde(rename = "fixedCRA")]
    pub fixed_cra: f64,
    #[serde(rename = "percentGrossIncomeCRA")]
    pub percent_gross_income_cra: f64,
    #[serde(rename = "rentReliefCap")]
    pub rent_relief_cap: f64,
    #[serde(rename = "pensionCapFixed")]
    pub pension_cap_fixed: f64,
    #[serde(rename = "lifeAssuranceCap")]
    pub life_assurance_cap: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimumTaxRates {
    pub gross: f64,
}

/// Where the backend loaded its configuration from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ConfigSource {
    Database,
    #[default]
    Fallback,
}

impl From<String> for ConfigSource {
    fn from(s: String) -> Self {
        if s == "database" {
            ConfigSource::Database
        } else {
            ConfigSource::Fallback
        }
    }
}

impl From<ConfigSource> for String {
    fn from(s: ConfigSource) -> Self {
        match s {
            ConfigSource::Database => "database".into(),
            ConfigSource::Fallback => "fallback".into(),
        }
    }
}

impl ConfigSource {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigSource::Database => "Database",
            ConfigSource::Fallback => "Fallback",
        }
    }
}

/// Active tax configuration as reported by `GET /api/tax/config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxConfig {
    pub config_name: String,
    pub source: ConfigSource,
    pub tax_bands: Vec<TaxBand>,
    pub reliefs: Reliefs,
    pub minimum_tax_rates: MinimumTaxRates,
    pub presumptive_tax_rate: f64,
    pub minimum_wage_annual: f64,
    pub digital_asset_ring_fencing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_band_range() {
        let first = TaxBand { min: 0.0, max: Some(800_000.0), rate: 0.0 };
        let middle = TaxBand { min: 800_000.0, max: Some(3_000_000.0), rate: 0.15 };
        let top = TaxBand { min: 50_000_000.0, max: None, rate: 0.25 };
        let infinite = TaxBand { min: 1.0, max: Some(f64::INFINITY), rate: 0.25 };

        assert_eq!(first.range(), BandRange::UpTo(800_000.0));
        assert_eq!(middle.range(), BandRange::Between(800_000.0, 3_000_000.0));
        assert_eq!(top.range(), BandRange::Above(50_000_000.0));
        assert_eq!(infinite.range(), BandRange::Above(1.0));
    }

    #[test]
    fn test_config_from_backend_json() {
        let cfg: TaxConfig = serde_json::from_value(json!({
            "configName": "Nigeria Tax Act 2025",
            "source": "database",
            "taxBands": [
                { "min": 0, "max": 800000, "rate": 0 },
                { "min": 50000000, "max": null, "rate": 0.25 }
            ],
            "reliefs": {
                "fixedCRA": 200000,
                "percentGrossIncomeCRA": 0.2,
                "rentReliefCap": 500000,
                "pensionCapFixed": 0,
                "lifeAssuranceCap": 100000
            },
            "minimumTaxRates": { "gross": 0.01 },
            "presumptiveTaxRate": 0.05,
            "minimumWageAnnual": 840000,
            "digitalAssetRingFencing": true
        }))
        .unwrap();

        assert_eq!(cfg.source, ConfigSource::Database);
        assert_eq!(cfg.tax_bands[1].max, None);
        assert_eq!(cfg.reliefs.fixed_cra, 200_000.0);
        assert_eq!(cfg.reliefs.percent_gross_income_cra, 0.2);
        assert!(cfg.digital_asset_ring_fencing);
    }

    #[test]
    fn test_unknown_source_is_fallback() {
        let cfg: TaxConfig =
            serde_json::from_value(json!({ "configName": "x", "source": "file" })).unwrap();
        assert_eq!(cfg.source, ConfigSource::Fallback);
        assert_eq!(cfg.source.label(), "Fallback");
    }
}
