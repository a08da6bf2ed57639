//! Document checklist derived from the income sources in use.

use serde::{Deserialize, Serialize};

/// An income source entered on the scenario, as far as documentation cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum IncomeSource {
    /// W-2 employment.
    W2,
    /// Sole proprietorship (Schedule C).
    ScheduleC,
    /// Partnership or S-corp (K-1).
    K1,
    /// C-corporation (1120).
    CCorp,
    /// Rental property.
    Rental,
    /// Other income with a free-form kind label.
    Other {
        /// The kind label, e.g. "Child Support".
        kind: String,
    },
}

impl IncomeSource {
    fn documents(&self) -> Vec<&'static str> {
        match self {
            Self::W2 => vec!["Last two pay stubs", "W-2s"],
            Self::ScheduleC | Self::CCorp => vec!["1040s", "Business bank statements"],
            Self::K1 => vec!["1040s", "K-1s"],
            Self::Rental => vec!["1040s", "Leases"],
            Self::Other { kind } => {
                if kind.to_lowercase().contains("child") {
                    vec!["Child support court orders"]
                } else {
                    vec!["Proof of other income"]
                }
            }
        }
    }
}

/// Builds the de-duplicated, order-preserving document list for the sources.
#[must_use]
pub fn document_checklist(sources: &[IncomeSource]) -> Vec<&'static str> {
    let mut docs: Vec<&'static str> = Vec::new();
    for source in sources {
        for doc in source.documents() {
            if !docs.contains(&doc) {
                docs.push(doc);
            }
        }
    }
    docs
}
