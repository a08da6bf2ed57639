//! Loan program, credit score bucket, and occupancy types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mortgage loan program.
///
/// The program drives DTI targets, mortgage insurance treatment, and
/// upfront fee schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoanProgram {
    /// Conventional conforming (private MI above 80% LTV)
    #[default]
    Conventional,
    /// FHA insured (UFMIP plus annual MIP)
    Fha,
    /// VA guaranteed (funding fee, no monthly MI)
    Va,
    /// USDA rural development (upfront guarantee plus annual fee)
    Usda,
    /// Non-conforming jumbo (no MI, no upfront fee)
    Jumbo,
}

impl LoanProgram {
    /// Returns true for government-backed programs (FHA/VA/USDA).
    ///
    /// Government programs allow the larger non-taxable income gross-up.
    #[must_use]
    pub fn is_government(&self) -> bool {
        matches!(self, LoanProgram::Fha | LoanProgram::Va | LoanProgram::Usda)
    }
}

impl fmt::Display for LoanProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanProgram::Conventional => "Conventional",
            LoanProgram::Fha => "FHA",
            LoanProgram::Va => "VA",
            LoanProgram::Usda => "USDA",
            LoanProgram::Jumbo => "Jumbo",
        };
        write!(f, "{name}")
    }
}

/// Credit score bucket used for MI factor lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FicoBucket {
    /// Score of 760 or above
    #[default]
    Prime760Plus,
    /// Score in 720-759
    Near720To759,
    /// Score below 720
    Below720,
}

impl FicoBucket {
    /// Maps a numeric credit score to its bucket.
    ///
    /// `None` (no score supplied) falls back to the top bucket, matching
    /// the behavior underwriters expect for pre-qualification estimates.
    #[must_use]
    pub fn from_score(score: Option<u32>) -> Self {
        match score {
            None => FicoBucket::Prime760Plus,
            Some(s) if s >= 760 => FicoBucket::Prime760Plus,
            Some(s) if s >= 720 => FicoBucket::Near720To759,
            Some(_) => FicoBucket::Below720,
        }
    }
}

impl fmt::Display for FicoBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FicoBucket::Prime760Plus => "760+",
            FicoBucket::Near720To759 => "720-759",
            FicoBucket::Below720 => "<720",
        };
        write!(f, "{name}")
    }
}

/// Occupancy type of the subject property.
///
/// Drives reserve requirements and the investment-property rule prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Occupancy {
    /// Primary residence
    #[default]
    Primary,
    /// Second home / vacation property
    SecondHome,
    /// Investment property
    Investment,
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Occupancy::Primary => "Primary",
            Occupancy::SecondHome => "Second Home",
            Occupancy::Investment => "Investment",
        };
        write!(f, "{name}")
    }
}
