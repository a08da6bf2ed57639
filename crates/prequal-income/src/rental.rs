//! Rental income qualification.
//!
//! Two qualification methods cover the usual documentation situations:
//!
//! - **Schedule E**: tax-return net income with depreciation added back,
//!   averaged across years with decline detection
//! - **75% of gross**: a 25% vacancy/expense haircut on gross rent, used
//!   when tax returns don't yet reflect the property; optionally credits
//!   the subject property's market rent against its PITIA

use std::collections::BTreeMap;

use prequal_core::types::{BorrowerId, MONTHS_PER_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::averaging::{AveragingMethod, SourceSummary, YearlyTotals};
use crate::records::RentalRecord;

/// The standard rent offset: 75% of gross rent counts as income.
pub const GROSS_RENT_OFFSET: Decimal = dec!(0.75);

/// Rental income qualification method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RentalMethod {
    /// Schedule E net income with depreciation add-back
    #[default]
    ScheduleE,
    /// 75% of gross rent, with optional subject-property credit
    GrossRent75,
}

/// Rental qualification settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RentalQualification {
    /// Qualification method.
    pub method: RentalMethod,
    /// Subject property full housing payment (PITIA), for the credit.
    pub subject_pitia: Decimal,
    /// Subject property market rent; zero disables the credit.
    pub subject_market_rent: Decimal,
}

/// Qualifies rental income into per-borrower monthly summaries.
///
/// Under [`RentalMethod::GrossRent75`] the subject-property credit
/// (`0.75 * market rent - PITIA`, possibly negative) accrues to the
/// primary borrower, and no decline flag is produced.
///
/// # Example
///
/// ```rust
/// use prequal_income::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let record = RentalRecord {
///     year: 2024.into(),
///     rents: dec!(24000),
///     expenses: dec!(12000),
///     depreciation: dec!(3000),
///     ..Default::default()
/// };
/// let qual = RentalQualification::default();
/// let summary = &analyze_rentals(&[record], &qual)[0];
/// assert_eq!(summary.monthly, dec!(1250));
/// ```
#[must_use]
pub fn analyze_rentals(
    records: &[RentalRecord],
    qualification: &RentalQualification,
) -> Vec<SourceSummary> {
    match qualification.method {
        RentalMethod::ScheduleE => {
            let mut totals = YearlyTotals::new();
            for record in records {
                let net_annual = record.rents - record.expenses + record.depreciation;
                totals.add(record.borrower, record.year, net_annual);
            }
            totals.summarize(AveragingMethod::AllYears)
        }
        RentalMethod::GrossRent75 => gross_rent_summaries(records, qualification),
    }
}

fn gross_rent_summaries(
    records: &[RentalRecord],
    qualification: &RentalQualification,
) -> Vec<SourceSummary> {
    let mut gross_monthly: BTreeMap<BorrowerId, Decimal> = BTreeMap::new();
    for record in records {
        *gross_monthly.entry(record.borrower).or_insert(Decimal::ZERO) +=
            record.rents / MONTHS_PER_YEAR;
    }

    let mut summaries: Vec<SourceSummary> = gross_monthly
        .into_iter()
        .map(|(borrower, gross)| SourceSummary {
            borrower,
            monthly: GROSS_RENT_OFFSET * gross,
            declining: false,
        })
        .collect();

    if qualification.subject_market_rent > Decimal::ZERO {
        let credit = GROSS_RENT_OFFSET * qualification.subject_market_rent
            - qualification.subject_pitia;
        match summaries
            .iter_mut()
            .find(|s| s.borrower == BorrowerId::PRIMARY)
        {
            Some(primary) => primary.monthly += credit,
            None => summaries.insert(
                0,
                SourceSummary {
                    borrower: BorrowerId::PRIMARY,
                    monthly: credit,
                    declining: false,
                },
            ),
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(borrower: u32, year: i32, rents: Decimal) -> RentalRecord {
        RentalRecord {
            borrower: BorrowerId::new(borrower),
            year: year.into(),
            rents,
            ..Default::default()
        }
    }

    #[test]
    fn test_schedule_e_net() {
        let record = RentalRecord {
            year: 2024.into(),
            rents: dec!(24000),
            expenses: dec!(12000),
            depreciation: dec!(3000),
            ..Default::default()
        };
        let summaries = analyze_rentals(&[record], &RentalQualification::default());
        assert_eq!(summaries[0].monthly, dec!(15000) / dec!(12));
    }

    #[test]
    fn test_schedule_e_declining() {
        let records = vec![
            RentalRecord {
                year: 2023.into(),
                rents: dec!(24000),
                expenses: dec!(12000),
                depreciation: dec!(3000),
                ..Default::default()
            },
            RentalRecord {
                year: 2024.into(),
                rents: dec!(18000),
                expenses: dec!(12000),
                depreciation: dec!(3000),
                ..Default::default()
            },
        ];
        let summaries = analyze_rentals(&records, &RentalQualification::default());
        assert!(summaries[0].declining);
    }

    #[test]
    fn test_gross_rent_with_subject_credit() {
        let qual = RentalQualification {
            method: RentalMethod::GrossRent75,
            subject_pitia: dec!(1000),
            subject_market_rent: dec!(2000),
        };
        let summaries = analyze_rentals(&[property(1, 2024, dec!(12000))], &qual);
        let expected = dec!(0.75) * dec!(1000) + dec!(0.75) * dec!(2000) - dec!(1000);
        assert_eq!(summaries[0].monthly, expected);
        assert!(!summaries[0].declining);
    }

    #[test]
    fn test_subject_credit_goes_to_primary_only() {
        let qual = RentalQualification {
            method: RentalMethod::GrossRent75,
            subject_pitia: dec!(500),
            subject_market_rent: dec!(2000),
        };
        let records = vec![
            property(1, 2024, dec!(12000)),
            property(2, 2024, dec!(12000)),
        ];
        let summaries = analyze_rentals(&records, &qual);
        assert_eq!(summaries[0].monthly, dec!(750) + dec!(1500) - dec!(500));
        assert_eq!(summaries[1].monthly, dec!(750));
    }

    #[test]
    fn test_subject_credit_without_primary_rentals() {
        let qual = RentalQualification {
            method: RentalMethod::GrossRent75,
            subject_pitia: dec!(1400),
            subject_market_rent: dec!(2000),
        };
        let summaries = analyze_rentals(&[property(2, 2024, dec!(12000))], &qual);
        assert_eq!(summaries[0].borrower, BorrowerId::PRIMARY);
        assert_eq!(summaries[0].monthly, dec!(100));
        assert_eq!(summaries[1].monthly, dec!(750));
    }

    #[test]
    fn test_gross_rent_no_market_rent_no_credit() {
        let qual = RentalQualification {
            method: RentalMethod::GrossRent75,
            subject_pitia: dec!(1000),
            subject_market_rent: Decimal::ZERO,
        };
        let summaries = analyze_rentals(&[property(1, 2024, dec!(12000))], &qual);
        assert_eq!(summaries[0].monthly, dec!(750));
    }
}
