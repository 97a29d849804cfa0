use serde::{Deserialize, Serialize};

/// Cost inputs for a single platform
///
/// One record per platform replaces the three parallel lists the formula is
/// usually written with, so the attribute collections can never be misaligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCost {
    pub name: String,
    /// Flat recurring cost, amortized over the total search volume
    pub fixed_cost: f64,
    /// Marginal cost per API invocation
    pub cost_per_call: f64,
    /// API invocations this platform makes per single search
    pub calls_per_search: f64,
}

impl PlatformCost {
    pub fn new(
        name: impl Into<String>,
        fixed_cost: f64,
        cost_per_call: f64,
        calls_per_search: f64,
    ) -> Self {
        Self {
            name: name.into(),
            fixed_cost,
            cost_per_call,
            calls_per_search,
        }
    }

    /// Variable cost this platform contributes to a single search
    pub fn variable_cost(&self) -> f64 {
        self.cost_per_call * self.calls_per_search
    }
}

/// Cost breakdown for a single search
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Total fixed costs divided by the search volume
    pub fixed_cost_per_search: f64,
    /// Sum of cost-per-call times calls-per-search over all platforms
    pub variable_cost_per_search: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Calculate total cost from components
    pub fn calculate_total(&mut self) {
        self.total = self.fixed_cost_per_search + self.variable_cost_per_search;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_cost() {
        let platform = PlatformCost::new("SerpAPI", 75.0, 0.02, 2.0);
        assert_eq!(platform.variable_cost(), 0.04);
    }

    #[test]
    fn test_calculate_total() {
        let mut breakdown = CostBreakdown {
            fixed_cost_per_search: 0.021,
            variable_cost_per_search: 0.0576,
            total: 0.0,
        };
        breakdown.calculate_total();
        assert!((breakdown.total - 0.0786).abs() < 1e-12);
    }
}
