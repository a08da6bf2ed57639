//! Integration tests for prequal-income.
//!
//! These tests run full document bundles through the combiner the way a
//! two-borrower application would arrive from intake.

use prequal_core::types::BorrowerId;
use prequal_income::prelude::*;
use rust_decimal_macros::dec;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Borrower 1: salaried W-2 with a year and a half of bonus history.
fn salaried_w2() -> W2Record {
    W2Record {
        borrower: BorrowerId::PRIMARY,
        employer: "Coastal Health Partners".to_owned(),
        pay_type: PayType::Salary,
        annual_salary: dec!(96000),
        bonus_ytd: dec!(6000),
        months_ytd: dec!(6),
        bonus_last_year: dec!(12000),
        months_last_year: dec!(12),
        include_variable: true,
        ..Default::default()
    }
}

/// Borrower 2: two years of Schedule C returns for a landscaping business.
fn landscaping_schedule_c() -> Vec<ScheduleCRecord> {
    vec![
        ScheduleCRecord {
            borrower: BorrowerId::new(2),
            business_name: "Verde Landscaping".to_owned(),
            year: 2024.into(),
            net_profit: dec!(54000),
            depreciation: dec!(6000),
            business_miles: dec!(10000),
            mile_depreciation_rate: dec!(0.30),
            ..Default::default()
        },
        ScheduleCRecord {
            borrower: BorrowerId::new(2),
            business_name: "Verde Landscaping".to_owned(),
            year: 2023.into(),
            net_profit: dec!(48000),
            depreciation: dec!(6000),
            business_miles: dec!(9000),
            mile_depreciation_rate: dec!(0.28),
            ..Default::default()
        },
    ]
}

fn two_borrower_application() -> IncomeSources {
    IncomeSources {
        w2: vec![salaried_w2()],
        schedule_c: landscaping_schedule_c(),
        other: vec![OtherIncomeRecord {
            borrower: BorrowerId::PRIMARY,
            kind: "Social Security".to_owned(),
            gross_monthly: dec!(800),
            gross_up_pct: dec!(25),
            ..Default::default()
        }],
        ..Default::default()
    }
}

// =============================================================================
// COMBINED APPLICATION
// =============================================================================

#[test]
fn test_two_borrower_application_totals() {
    let rows = combine_income(2, &two_borrower_application(), AveragingMethod::AllYears).unwrap();
    assert_eq!(rows.len(), 2);

    // Borrower 1: 8000 base + (6000+12000)/18 variable + 800*1.25 grossed up
    let primary = &rows[0];
    assert_eq!(primary.w2_monthly, dec!(9000));
    assert_eq!(primary.other_monthly, dec!(1000));
    assert_eq!(primary.total_monthly, dec!(10000));

    // Borrower 2: two-year Schedule C average with add-backs
    let secondary = &rows[1];
    let year_2024 = dec!(54000) + dec!(6000) + dec!(10000) * dec!(0.30);
    let year_2023 = dec!(48000) + dec!(6000) + dec!(9000) * dec!(0.28);
    assert_eq!(secondary.schedule_c_monthly, (year_2024 + year_2023) / dec!(24));
    assert!(!secondary.flags.schedule_c_declining);

    assert_eq!(
        total_monthly_income(&rows),
        primary.total_monthly + secondary.total_monthly
    );
}

#[test]
fn test_application_flags_are_per_borrower() {
    let mut sources = two_borrower_application();
    // Borrower 1's bonus collapsed this year
    sources.w2[0].bonus_ytd = dec!(500);
    let rows = combine_income(2, &sources, AveragingMethod::AllYears).unwrap();
    assert!(rows[0].flags.w2_declining_variable);
    assert!(!rows[1].flags.any_declining());
}

#[test]
fn test_most_recent_year_averaging_uses_latest_only() {
    let sources = two_borrower_application();
    let rows = combine_income(2, &sources, AveragingMethod::MostRecentYear).unwrap();
    let year_2024 = dec!(54000) + dec!(6000) + dec!(10000) * dec!(0.30);
    assert_eq!(rows[1].schedule_c_monthly, year_2024 / dec!(12));
}

// =============================================================================
// RENTAL QUALIFICATION PATHS
// =============================================================================

#[test]
fn test_gross_rent_subject_credit_lands_on_primary() {
    let sources = IncomeSources {
        w2: vec![salaried_w2()],
        rental: vec![RentalRecord {
            borrower: BorrowerId::new(2),
            property: "14 Palmetto Ct".to_owned(),
            year: 2024.into(),
            rents: dec!(24000),
            ..Default::default()
        }],
        rental_qualification: RentalQualification {
            method: RentalMethod::GrossRent75,
            subject_pitia: dec!(1400),
            subject_market_rent: dec!(2000),
        },
        ..Default::default()
    };
    let rows = combine_income(2, &sources, AveragingMethod::AllYears).unwrap();
    // 0.75 * 2000 - 1400 = 100 to borrower 1; 0.75 * 2000 to borrower 2
    assert_eq!(rows[0].rental_monthly, dec!(100));
    assert_eq!(rows[1].rental_monthly, dec!(1500));
}

#[test]
fn test_schedule_e_rental_declining_flag() {
    let sources = IncomeSources {
        rental: vec![
            RentalRecord {
                year: 2024.into(),
                rents: dec!(18000),
                expenses: dec!(9000),
                ..Default::default()
            },
            RentalRecord {
                year: 2023.into(),
                rents: dec!(30000),
                expenses: dec!(9000),
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    let rows = combine_income(1, &sources, AveragingMethod::AllYears).unwrap();
    // 9000 latest vs 21000 prior is well under the 80% floor
    assert!(rows[0].flags.rental_declining);
}

// =============================================================================
// OWNERSHIP RULES
// =============================================================================

#[test]
fn test_k1_income_is_ownership_weighted() {
    let sources = IncomeSources {
        k1: vec![K1Record {
            year: 2024.into(),
            form: K1Form::Form1065,
            ownership_pct: dec!(50),
            ordinary: dec!(120000),
            ..Default::default()
        }],
        ..Default::default()
    };
    let rows = combine_income(1, &sources, AveragingMethod::AllYears).unwrap();
    assert_eq!(rows[0].k1_monthly, dec!(5000));
}

#[test]
fn test_partial_c_corp_ownership_contributes_nothing() {
    let records = vec![CCorpRecord {
        year: 2024.into(),
        ownership_pct: dec!(60),
        taxable_income: dec!(200000),
        ..Default::default()
    }];
    assert!(any_partial_ownership(&records));

    let sources = IncomeSources {
        c_corp: records,
        ..Default::default()
    };
    let rows = combine_income(1, &sources, AveragingMethod::AllYears).unwrap();
    assert_eq!(rows[0].c_corp_monthly, dec!(0));
}
