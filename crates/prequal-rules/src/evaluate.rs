//! Rule evaluation over a qualification snapshot.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use crate::finding::{RuleCode, RuleFinding};
use crate::snapshot::QualificationSnapshot;

/// Year-over-year income below this fraction of the prior year is a decline.
const TOTAL_DECLINE_THRESHOLD: Decimal = dec!(0.8);

/// Back-end ratio at or above this fraction prompts a reserves reminder.
const RESERVES_BACK_END_PROMPT: Decimal = dec!(0.45);

/// Evaluates every advisory rule against the snapshot.
///
/// Ordering is deterministic: per-source history warnings first (W-2,
/// Schedule C, K-1, C-corp, rental, totals), then documentation blockers,
/// then ratio checks, then informational prompts.
#[must_use]
pub fn evaluate(snapshot: &QualificationSnapshot) -> Vec<RuleFinding> {
    let mut findings = Vec::new();

    if snapshot.w2.variable_short_history {
        findings.push(RuleFinding::new(RuleCode::W2VariableShortHistory));
    }
    if snapshot.w2.variable_missing_months > 0 {
        findings.push(
            RuleFinding::new(RuleCode::W2VariableMissingMonths).with_context(
                "missing_months",
                json!(snapshot.w2.variable_missing_months),
            ),
        );
    }
    if snapshot.w2.declining_variable {
        findings.push(RuleFinding::new(RuleCode::W2VariableDeclining));
    }
    if snapshot.w2.declining_base {
        findings.push(RuleFinding::new(RuleCode::W2BaseDeclining));
    }
    if snapshot.schedule_c_declining {
        findings.push(RuleFinding::new(RuleCode::ScheduleCDeclining));
    }
    if snapshot.k1_declining {
        findings.push(RuleFinding::new(RuleCode::K1Declining));
    }
    if snapshot.c_corp_declining {
        findings.push(RuleFinding::new(RuleCode::CCorpDeclining));
    }
    if snapshot.rental_declining {
        findings.push(RuleFinding::new(RuleCode::RentalDeclining));
    }
    if let Some(finding) = total_income_decline(snapshot) {
        findings.push(finding);
    }

    if snapshot.uses_k1
        && !(snapshot.k1_distributions_verified || snapshot.k1_liquidity_analyzed)
    {
        findings.push(RuleFinding::new(RuleCode::K1DistributionsUnverified));
    }
    if snapshot.uses_c_corp && snapshot.c_corp_partial_ownership {
        findings.push(RuleFinding::new(RuleCode::CCorpOwnershipUnder100));
    }
    if snapshot.uses_support_income && !snapshot.support_continuance_verified {
        findings.push(RuleFinding::new(RuleCode::SupportContinuanceUnverified));
    }
    if snapshot.rental_method_conflict {
        findings.push(RuleFinding::new(RuleCode::RentalMethodConflict));
    }
    if snapshot.rental_income < Decimal::ZERO {
        findings.push(
            RuleFinding::new(RuleCode::RentalIncomeNegative)
                .with_context("rental_income", json!(snapshot.rental_income)),
        );
    }
    if snapshot.total_income <= Decimal::ZERO {
        findings.push(RuleFinding::new(RuleCode::NoIncome));
    }

    if snapshot.ratios.front_end_pct() > snapshot.target_front_pct {
        findings.push(
            RuleFinding::new(RuleCode::HousingRatioOverLimit)
                .with_context("front_end_pct", json!(snapshot.ratios.front_end_pct()))
                .with_context("target_front_pct", json!(snapshot.target_front_pct)),
        );
    }
    if snapshot.ratios.back_end_pct() > snapshot.target_back_pct {
        findings.push(
            RuleFinding::new(RuleCode::TotalDtiOverLimit)
                .with_context("back_end_pct", json!(snapshot.ratios.back_end_pct()))
                .with_context("target_back_pct", json!(snapshot.target_back_pct)),
        );
    }

    if snapshot.ratios.back_end >= RESERVES_BACK_END_PROMPT || snapshot.investment_property {
        findings.push(RuleFinding::new(RuleCode::ConsiderReserves));
    }
    if snapshot.inputs_out_of_band {
        findings.push(RuleFinding::new(RuleCode::InputsOutOfBand));
    }

    findings
}

/// Latest annual income below 80% of the prior year is flagged.
fn total_income_decline(snapshot: &QualificationSnapshot) -> Option<RuleFinding> {
    let mut years = snapshot.income_history.iter();
    let (_, latest) = years.next_back()?;
    let (_, prior) = years.next_back()?;
    if *prior > Decimal::ZERO && *latest < *prior * TOTAL_DECLINE_THRESHOLD {
        Some(
            RuleFinding::new(RuleCode::TotalIncomeDeclining)
                .with_context("latest", json!(latest))
                .with_context("prior", json!(prior)),
        )
    } else {
        None
    }
}
