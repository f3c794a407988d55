pub mod calculation;
pub mod config;

pub use calculation::{
    BandTax, CalculatedTax, DeductionSummary, Deductions, IncomeSource, IncomeType, RateLabel, TaxCalculation,
    TaxCalculationRequest, TaxResult,
};
pub use config::{BandRange, ConfigSource, MinimumTaxRates, Reliefs, TaxBand, TaxConfig};
