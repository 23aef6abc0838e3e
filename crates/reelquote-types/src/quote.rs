//! Structured project estimate.

use serde::{Deserialize, Serialize};

use crate::Schema;

/// One line of the service breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Service label (e.g., "Storyboarding").
    pub item: String,
    /// Cost label (e.g., "$150").
    pub cost: String,
}

impl BreakdownItem {
    /// Creates a new breakdown line.
    #[must_use]
    pub fn new(item: impl Into<String>, cost: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            cost: cost.into(),
        }
    }
}

/// A cost and timeline estimate for a project.
///
/// Every field is an opaque display string supplied by the model; nothing is
/// parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Estimated cost range (e.g., "$500-$800").
    pub estimated_cost_range: String,
    /// Estimated timeline (e.g., "1-2 weeks").
    pub timeline_estimate: String,
    /// Itemized services, in the order returned.
    pub breakdown: Vec<BreakdownItem>,
    /// Assumptions the estimate is based on.
    pub assumptions: String,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(
        estimated_cost_range: impl Into<String>,
        timeline_estimate: impl Into<String>,
        breakdown: Vec<BreakdownItem>,
        assumptions: impl Into<String>,
    ) -> Self {
        Self {
            estimated_cost_range: estimated_cost_range.into(),
            timeline_estimate: timeline_estimate.into(),
            breakdown,
            assumptions: assumptions.into(),
        }
    }

    /// Returns the response schema the model must follow.
    ///
    /// Property names match the serialized field names of [`Quote`] and
    /// [`BreakdownItem`].
    #[must_use]
    pub fn response_schema() -> Schema {
        let item = Schema::object([("item", Schema::string()), ("cost", Schema::string())])
            .with_required(["item", "cost"]);

        Schema::object([
            ("estimatedCostRange", Schema::string()),
            ("timelineEstimate", Schema::string()),
            ("breakdown", Schema::array(item)),
            ("assumptions", Schema::string()),
        ])
        .with_required([
            "estimatedCostRange",
            "timelineEstimate",
            "breakdown",
            "assumptions",
        ])
    }

    /// Returns true if the breakdown has no lines.
    #[must_use]
    pub fn is_breakdown_empty(&self) -> bool {
        self.breakdown.is_empty()
    }
}
