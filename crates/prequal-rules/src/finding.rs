//! Rule findings: codes, severities, and contextual payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Severity ladder for advisory findings.
///
/// Ordered so that `Critical` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational prompt; no action required.
    Info,
    /// Needs underwriter attention but does not block.
    Warn,
    /// Blocks qualification until resolved.
    Critical,
}

/// Stable identifiers for every advisory rule.
///
/// The wire form is SCREAMING_SNAKE (e.g. `W2_VARIABLE_DECLINING`) so
/// downstream reporting can key on it without caring about the Rust name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    /// Variable W-2 income included with under 12 months of history.
    W2VariableShortHistory,
    /// Variable W-2 history is missing months of earnings data.
    W2VariableMissingMonths,
    /// W-2 variable earnings trending down year over year.
    W2VariableDeclining,
    /// W-2 base earnings trending down year over year.
    W2BaseDeclining,
    /// Schedule C income declined more than 20% year over year.
    ScheduleCDeclining,
    /// K-1 income declining year over year.
    K1Declining,
    /// C-corp (1120) income declining year over year.
    CCorpDeclining,
    /// Rental income declining year over year.
    RentalDeclining,
    /// Total qualifying income declined more than 20% year over year.
    TotalIncomeDeclining,
    /// K-1 income used without verified distributions or a liquidity analysis.
    K1DistributionsUnverified,
    /// C-corp income used with ownership below 100%.
    #[serde(rename = "C_CORP_OWNERSHIP_UNDER_100")]
    CCorpOwnershipUnder100,
    /// Support income used without verified continuance.
    SupportContinuanceUnverified,
    /// Both rental qualification methods selected at once.
    RentalMethodConflict,
    /// Net rental income is negative.
    RentalIncomeNegative,
    /// No qualifying income entered.
    NoIncome,
    /// Front-end ratio exceeds the program target.
    HousingRatioOverLimit,
    /// Back-end ratio exceeds the program target.
    TotalDtiOverLimit,
    /// Reserves worth documenting for this profile.
    ConsiderReserves,
    /// Tax, insurance, or MI inputs look out of band for the price.
    InputsOutOfBand,
}

impl RuleCode {
    /// The wire identifier for this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W2VariableShortHistory => "W2_VARIABLE_SHORT_HISTORY",
            Self::W2VariableMissingMonths => "W2_VARIABLE_MISSING_MONTHS",
            Self::W2VariableDeclining => "W2_VARIABLE_DECLINING",
            Self::W2BaseDeclining => "W2_BASE_DECLINING",
            Self::ScheduleCDeclining => "SCHEDULE_C_DECLINING",
            Self::K1Declining => "K1_DECLINING",
            Self::CCorpDeclining => "C_CORP_DECLINING",
            Self::RentalDeclining => "RENTAL_DECLINING",
            Self::TotalIncomeDeclining => "TOTAL_INCOME_DECLINING",
            Self::K1DistributionsUnverified => "K1_DISTRIBUTIONS_UNVERIFIED",
            Self::CCorpOwnershipUnder100 => "C_CORP_OWNERSHIP_UNDER_100",
            Self::SupportContinuanceUnverified => "SUPPORT_CONTINUANCE_UNVERIFIED",
            Self::RentalMethodConflict => "RENTAL_METHOD_CONFLICT",
            Self::RentalIncomeNegative => "RENTAL_INCOME_NEGATIVE",
            Self::NoIncome => "NO_INCOME",
            Self::HousingRatioOverLimit => "HOUSING_RATIO_OVER_LIMIT",
            Self::TotalDtiOverLimit => "TOTAL_DTI_OVER_LIMIT",
            Self::ConsiderReserves => "CONSIDER_RESERVES",
            Self::InputsOutOfBand => "INPUTS_OUT_OF_BAND",
        }
    }

    /// The fixed severity of this rule.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::K1DistributionsUnverified
            | Self::CCorpOwnershipUnder100
            | Self::SupportContinuanceUnverified
            | Self::NoIncome => Severity::Critical,
            Self::ConsiderReserves | Self::InputsOutOfBand => Severity::Info,
            _ => Severity::Warn,
        }
    }

    /// The standard advisory message for this rule.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::W2VariableShortHistory => {
                "Variable W-2 income included with under 12 months of history."
            }
            Self::W2VariableMissingMonths => {
                "W-2 variable income history is missing months of earnings."
            }
            Self::W2VariableDeclining => "Potentially declining W-2 variable income.",
            Self::W2BaseDeclining => "Potentially declining W-2 base income.",
            Self::ScheduleCDeclining => "Schedule C year-over-year decline exceeds 20%.",
            Self::K1Declining => "K-1 income declining year over year.",
            Self::CCorpDeclining => "1120 income declining year over year.",
            Self::RentalDeclining => "Rental income declining year over year.",
            Self::TotalIncomeDeclining => {
                "Total qualifying income declined more than 20% year over year."
            }
            Self::K1DistributionsUnverified => {
                "K-1 income used but distributions/liquidity not verified."
            }
            Self::CCorpOwnershipUnder100 => "1120 income requires 100% ownership to count.",
            Self::SupportContinuanceUnverified => {
                "Support income requires at least 3 years of continuance."
            }
            Self::RentalMethodConflict => {
                "Choose either Schedule E or 75% of gross rents, not both."
            }
            Self::RentalIncomeNegative => "Net rental income is negative.",
            Self::NoIncome => "No income entered; DTI is not meaningful.",
            Self::HousingRatioOverLimit => "Housing ratio exceeds the program target.",
            Self::TotalDtiOverLimit => "Total DTI exceeds the program target.",
            Self::ConsiderReserves => "Consider documenting reserves for this profile.",
            Self::InputsOutOfBand => "Inputs appear out of typical ranges for the purchase price.",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One advisory finding produced by rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleFinding {
    /// Stable rule identifier.
    pub code: RuleCode,
    /// Severity of the finding.
    pub severity: Severity,
    /// Human-readable advisory text.
    pub message: String,
    /// Supporting values for reporting, keyed by name.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub context: Map<String, Value>,
}

impl RuleFinding {
    /// Builds a finding with the code's standard severity and message.
    #[must_use]
    pub fn new(code: RuleCode) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: code.message().to_owned(),
            context: Map::new(),
        }
    }

    /// Attaches a context value.
    #[must_use]
    pub fn with_context(mut self, key: &str, value: Value) -> Self {
        self.context.insert(key.to_owned(), value);
        self
    }
}

/// Returns true when any finding is critical.
#[must_use]
pub fn has_blocking(findings: &[RuleFinding]) -> bool {
    findings
        .iter()
        .any(|f| f.severity == Severity::Critical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Critical);
    }

    #[test]
    fn test_code_wire_form_matches_serde() {
        let json = serde_json::to_string(&RuleCode::CCorpOwnershipUnder100).unwrap();
        assert_eq!(json, format!("\"{}\"", RuleCode::CCorpOwnershipUnder100));
    }

    #[test]
    fn test_has_blocking() {
        let findings = vec![
            RuleFinding::new(RuleCode::W2VariableDeclining),
            RuleFinding::new(RuleCode::NoIncome),
        ];
        assert!(has_blocking(&findings));
        assert!(!has_blocking(&findings[..1]));
    }
}
