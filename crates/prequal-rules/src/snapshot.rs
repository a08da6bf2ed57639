//! The qualification snapshot that rule evaluation reads.

use prequal_core::types::{DtiRatios, TaxYear};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// W-2 history facts that feed the variable-income rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct W2HistoryMeta {
    /// Variable income included with under 12 months of history.
    pub variable_short_history: bool,
    /// Months of variable earnings missing from the documented history.
    pub variable_missing_months: u32,
    /// Variable earnings trending down year over year.
    pub declining_variable: bool,
    /// Base earnings trending down year over year.
    pub declining_base: bool,
}

/// Everything the advisory rules need to know about a scenario.
///
/// Built from the income and qualification results; the rules never
/// recompute, they only inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualificationSnapshot {
    /// Total monthly qualifying income.
    pub total_income: Decimal,
    /// Front-end / back-end ratios for the scenario, as fractions.
    pub ratios: DtiRatios,
    /// Program front-end target, percent.
    pub target_front_pct: Decimal,
    /// Program back-end target, percent.
    pub target_back_pct: Decimal,
    /// W-2 history facts.
    pub w2: W2HistoryMeta,
    /// Schedule C income declined more than 20% year over year.
    pub schedule_c_declining: bool,
    /// K-1 income declining year over year.
    pub k1_declining: bool,
    /// C-corp income declining year over year.
    pub c_corp_declining: bool,
    /// Rental income declining year over year.
    pub rental_declining: bool,
    /// K-1 income contributes to qualifying income.
    pub uses_k1: bool,
    /// K-1 distributions verified against returns.
    pub k1_distributions_verified: bool,
    /// Business liquidity analyzed in lieu of distributions.
    pub k1_liquidity_analyzed: bool,
    /// C-corp income contributes to qualifying income.
    pub uses_c_corp: bool,
    /// Any C-corp record shows ownership below 100%.
    pub c_corp_partial_ownership: bool,
    /// Alimony/child support contributes to qualifying income.
    pub uses_support_income: bool,
    /// Support continuance of at least 3 years verified.
    pub support_continuance_verified: bool,
    /// Both rental qualification methods selected at once.
    pub rental_method_conflict: bool,
    /// Net monthly rental income for the scenario.
    pub rental_income: Decimal,
    /// Total annual qualifying income by tax year.
    pub income_history: BTreeMap<TaxYear, Decimal>,
    /// The subject property is an investment property.
    pub investment_property: bool,
    /// Tax/HOI/MI inputs out of typical ranges for the price.
    pub inputs_out_of_band: bool,
}

impl Default for QualificationSnapshot {
    fn default() -> Self {
        Self {
            total_income: Decimal::ZERO,
            ratios: DtiRatios::default(),
            target_front_pct: dec!(31),
            target_back_pct: dec!(45),
            w2: W2HistoryMeta::default(),
            schedule_c_declining: false,
            k1_declining: false,
            c_corp_declining: false,
            rental_declining: false,
            uses_k1: false,
            k1_distributions_verified: false,
            k1_liquidity_analyzed: false,
            uses_c_corp: false,
            c_corp_partial_ownership: false,
            uses_support_income: false,
            support_continuance_verified: false,
            rental_method_conflict: false,
            rental_income: Decimal::ZERO,
            income_history: BTreeMap::new(),
            investment_property: false,
            inputs_out_of_band: false,
        }
    }
}
