//! Program preset tables.
//!
//! This module encodes the agency-style policy tables the calculators
//! consume: DTI targets per program, conventional MI bands, FHA MIP
//! schedules, VA funding fees, and USDA guarantee fees.
//!
//! The shipped values are generic pre-qualification defaults. Lenders
//! overlay their own tables by constructing the table types directly;
//! every lookup takes the table as an argument rather than reaching for
//! a global.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{FicoBucket, LoanProgram};

/// Front-end / back-end DTI targets for a program, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiTargets {
    /// Target housing ratio, percent.
    pub front_end_pct: Decimal,
    /// Target total-DTI ratio, percent.
    pub back_end_pct: Decimal,
}

/// Returns the default DTI targets for a loan program.
///
/// # Example
///
/// ```rust
/// use prequal_core::presets::dti_targets;
/// use prequal_core::types::LoanProgram;
/// use rust_decimal_macros::dec;
///
/// let t = dti_targets(LoanProgram::Usda);
/// assert_eq!(t.front_end_pct, dec!(29));
/// assert_eq!(t.back_end_pct, dec!(41));
/// ```
#[must_use]
pub fn dti_targets(program: LoanProgram) -> DtiTargets {
    match program {
        LoanProgram::Conventional => DtiTargets {
            front_end_pct: dec!(31),
            back_end_pct: dec!(45),
        },
        LoanProgram::Fha => DtiTargets {
            front_end_pct: dec!(31),
            back_end_pct: dec!(50),
        },
        LoanProgram::Va => DtiTargets {
            front_end_pct: dec!(35),
            back_end_pct: dec!(50),
        },
        LoanProgram::Usda => DtiTargets {
            front_end_pct: dec!(29),
            back_end_pct: dec!(41),
        },
        LoanProgram::Jumbo => DtiTargets {
            front_end_pct: dec!(35),
            back_end_pct: dec!(43),
        },
    }
}

/// Annual private MI factors by LTV band, in percent of loan amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvMiBands {
    /// LTV >= 97
    pub ltv_97_plus: Decimal,
    /// 95 <= LTV < 97
    pub ltv_95_to_97: Decimal,
    /// 90 <= LTV < 95
    pub ltv_90_to_95: Decimal,
    /// 85 <= LTV < 90
    pub ltv_85_to_90: Decimal,
    /// LTV < 85 (no MI at the default values)
    pub ltv_below_85: Decimal,
}

impl ConvMiBands {
    /// Looks up the annual MI percentage for an LTV.
    #[must_use]
    pub fn factor_for_ltv(&self, ltv_pct: Decimal) -> Decimal {
        if ltv_pct >= dec!(97) {
            self.ltv_97_plus
        } else if ltv_pct >= dec!(95) {
            self.ltv_95_to_97
        } else if ltv_pct >= dec!(90) {
            self.ltv_90_to_95
        } else if ltv_pct >= dec!(85) {
            self.ltv_85_to_90
        } else {
            self.ltv_below_85
        }
    }

    /// Returns the band table for a FICO bucket.
    ///
    /// The default tables are identical across buckets today; the lookup
    /// stays bucket-aware so lender overlays can differentiate.
    #[must_use]
    pub fn for_bucket(_bucket: FicoBucket) -> Self {
        CONV_MI_BANDS
    }
}

/// Default conventional MI bands.
pub const CONV_MI_BANDS: ConvMiBands = ConvMiBands {
    ltv_97_plus: dec!(0.90),
    ltv_95_to_97: dec!(0.62),
    ltv_90_to_95: dec!(0.40),
    ltv_85_to_90: dec!(0.25),
    ltv_below_85: dec!(0.00),
};

/// FHA mortgage insurance premium schedule.
///
/// Annual MIP is keyed on the LTV (<=95 / >95) and the loan term
/// (<=15 / >15 years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FhaMipTable {
    /// Upfront MIP, percent of base loan.
    pub ufmip_pct: Decimal,
    /// Annual MIP, LTV <= 95 and term <= 15 years.
    pub annual_le95_le15: Decimal,
    /// Annual MIP, LTV <= 95 and term > 15 years.
    pub annual_le95_gt15: Decimal,
    /// Annual MIP, LTV > 95 and term <= 15 years.
    pub annual_gt95_le15: Decimal,
    /// Annual MIP, LTV > 95 and term > 15 years.
    pub annual_gt95_gt15: Decimal,
}

impl FhaMipTable {
    /// Looks up the annual MIP percentage for an LTV and term.
    #[must_use]
    pub fn annual_factor(&self, ltv_pct: Decimal, term_years: u32) -> Decimal {
        match (ltv_pct <= dec!(95), term_years <= 15) {
            (true, true) => self.annual_le95_le15,
            (true, false) => self.annual_le95_gt15,
            (false, true) => self.annual_gt95_le15,
            (false, false) => self.annual_gt95_gt15,
        }
    }
}

/// Default FHA MIP schedule.
pub const FHA_TABLES: FhaMipTable = FhaMipTable {
    ufmip_pct: dec!(1.75),
    annual_le95_le15: dec!(0.15),
    annual_le95_gt15: dec!(0.50),
    annual_gt95_le15: dec!(0.40),
    annual_gt95_gt15: dec!(0.55),
};

/// VA funding fee schedule by usage and down-payment band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaFundingFeeTable {
    /// First use, down payment < 5%.
    pub first_under_5: Decimal,
    /// First use, down payment 5-10%.
    pub first_5_to_10: Decimal,
    /// First use, down payment >= 10%.
    pub first_10_plus: Decimal,
    /// Subsequent use, down payment < 5%.
    pub subsequent_under_5: Decimal,
    /// Subsequent use, down payment 5-10%.
    pub subsequent_5_to_10: Decimal,
    /// Subsequent use, down payment >= 10%.
    pub subsequent_10_plus: Decimal,
}

impl VaFundingFeeTable {
    /// Looks up the funding fee percentage.
    #[must_use]
    pub fn fee_pct(&self, first_use: bool, down_payment_pct: Decimal) -> Decimal {
        if first_use {
            if down_payment_pct >= dec!(10) {
                self.first_10_plus
            } else if down_payment_pct >= dec!(5) {
                self.first_5_to_10
            } else {
                self.first_under_5
            }
        } else if down_payment_pct >= dec!(10) {
            self.subsequent_10_plus
        } else if down_payment_pct >= dec!(5) {
            self.subsequent_5_to_10
        } else {
            self.subsequent_under_5
        }
    }
}

/// Default VA funding fee schedule.
pub const VA_TABLE: VaFundingFeeTable = VaFundingFeeTable {
    first_under_5: dec!(2.15),
    first_5_to_10: dec!(1.50),
    first_10_plus: dec!(1.25),
    subsequent_under_5: dec!(3.30),
    subsequent_5_to_10: dec!(1.50),
    subsequent_10_plus: dec!(1.25),
};

/// USDA guarantee and annual fee percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsdaFeeTable {
    /// Upfront guarantee fee, percent of base loan.
    pub guarantee_pct: Decimal,
    /// Annual fee, percent of adjusted loan.
    pub annual_pct: Decimal,
}

/// Default USDA fee table.
pub const USDA_TABLE: UsdaFeeTable = UsdaFeeTable {
    guarantee_pct: dec!(1.00),
    annual_pct: dec!(0.35),
};

/// Regional sanity-check defaults (Florida market).
///
/// Used by out-of-band input detection, not by the fee calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalDefaults {
    /// Typical annual property tax rate, percent of purchase price.
    pub tax_rate_pct: Decimal,
    /// Typical annual homeowner's insurance premium.
    pub hoi_annual: Decimal,
    /// Typical annual MI percentage.
    pub mi_annual_pct: Decimal,
}

impl RegionalDefaults {
    /// Checks worksheet tax and insurance inputs against the regional
    /// defaults.
    ///
    /// An input is in band when it lies between zero and twice the regional
    /// default inclusive. Out-of-band inputs feed the advisory sanity
    /// finding, not a hard error.
    #[must_use]
    pub fn out_of_band(&self, tax_rate_pct: Decimal, hoi_annual: Decimal) -> bool {
        let two = dec!(2);
        tax_rate_pct < Decimal::ZERO
            || tax_rate_pct > self.tax_rate_pct * two
            || hoi_annual < Decimal::ZERO
            || hoi_annual > self.hoi_annual * two
    }
}

/// Florida market defaults.
pub const FLORIDA_DEFAULTS: RegionalDefaults = RegionalDefaults {
    tax_rate_pct: dec!(1.25),
    hoi_annual: dec!(1800),
    mi_annual_pct: dec!(0.60),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dti_targets_per_program() {
        assert_eq!(dti_targets(LoanProgram::Conventional).back_end_pct, dec!(45));
        assert_eq!(dti_targets(LoanProgram::Fha).back_end_pct, dec!(50));
        assert_eq!(dti_targets(LoanProgram::Jumbo).front_end_pct, dec!(35));
    }

    #[test]
    fn test_conv_mi_band_edges() {
        assert_eq!(CONV_MI_BANDS.factor_for_ltv(dec!(97)), dec!(0.90));
        assert_eq!(CONV_MI_BANDS.factor_for_ltv(dec!(96.99)), dec!(0.62));
        assert_eq!(CONV_MI_BANDS.factor_for_ltv(dec!(95)), dec!(0.62));
        assert_eq!(CONV_MI_BANDS.factor_for_ltv(dec!(90)), dec!(0.40));
        assert_eq!(CONV_MI_BANDS.factor_for_ltv(dec!(85)), dec!(0.25));
        assert_eq!(CONV_MI_BANDS.factor_for_ltv(dec!(80)), dec!(0.00));
    }

    #[test]
    fn test_fha_annual_factor() {
        assert_eq!(FHA_TABLES.annual_factor(dec!(95), 15), dec!(0.15));
        assert_eq!(FHA_TABLES.annual_factor(dec!(95), 30), dec!(0.50));
        assert_eq!(FHA_TABLES.annual_factor(dec!(96.5), 15), dec!(0.40));
        assert_eq!(FHA_TABLES.annual_factor(dec!(96.5), 30), dec!(0.55));
    }

    #[test]
    fn test_florida_defaults() {
        assert_eq!(FLORIDA_DEFAULTS.tax_rate_pct, dec!(1.25));
        assert_eq!(FLORIDA_DEFAULTS.hoi_annual, dec!(1800));
        assert_eq!(FLORIDA_DEFAULTS.mi_annual_pct, dec!(0.60));
    }

    #[test]
    fn test_regional_out_of_band() {
        assert!(!FLORIDA_DEFAULTS.out_of_band(dec!(1.25), dec!(1800)));
        assert!(!FLORIDA_DEFAULTS.out_of_band(dec!(2.50), dec!(3600)));
        assert!(FLORIDA_DEFAULTS.out_of_band(dec!(2.51), dec!(1800)));
        assert!(FLORIDA_DEFAULTS.out_of_band(dec!(1.25), dec!(3601)));
        assert!(FLORIDA_DEFAULTS.out_of_band(dec!(-0.1), dec!(1800)));
    }

    #[test]
    fn test_va_fee_bands() {
        assert_eq!(VA_TABLE.fee_pct(true, dec!(0)), dec!(2.15));
        assert_eq!(VA_TABLE.fee_pct(true, dec!(5)), dec!(1.50));
        assert_eq!(VA_TABLE.fee_pct(true, dec!(10)), dec!(1.25));
        assert_eq!(VA_TABLE.fee_pct(false, dec!(2)), dec!(3.30));
    }
}
