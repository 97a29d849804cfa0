use crate::cost::models::{CostBreakdown, PlatformCost};
use crate::error::CpsError;

/// Compute the blended cost per search
///
/// Fixed platform costs are amortized over `searches`; variable costs are
/// summed per platform as cost-per-call times calls-per-search. The result is
/// deterministic, side-effect free, and invariant to platform order.
///
/// Empty input is rejected here rather than by callers, so every entry point
/// (CLI, sweep, dashboard) inherits the check.
pub fn compute_cps(platforms: &[PlatformCost], searches: f64) -> Result<CostBreakdown, CpsError> {
    if platforms.is_empty() {
        return Err(CpsError::EmptyInput);
    }

    if !searches.is_finite() || searches <= 0.0 {
        return Err(CpsError::InvalidInput(format!(
            "search volume must be a positive number, got {}",
            searches
        )));
    }

    for platform in platforms {
        validate_field(&platform.name, "fixed_cost", platform.fixed_cost)?;
        validate_field(&platform.name, "cost_per_call", platform.cost_per_call)?;
        validate_field(&platform.name, "calls_per_search", platform.calls_per_search)?;
    }

    let total_fixed_cost: f64 = platforms.iter().map(|p| p.fixed_cost).sum();

    let mut breakdown = CostBreakdown {
        fixed_cost_per_search: total_fixed_cost / searches,
        variable_cost_per_search: platforms.iter().map(|p| p.variable_cost()).sum(),
        total: 0.0,
    };
    breakdown.calculate_total();

    Ok(breakdown)
}

fn validate_field(platform: &str, field: &str, value: f64) -> Result<(), CpsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CpsError::InvalidInput(format!(
            "platform '{}' has invalid {}: {}",
            platform, field, value
        )));
    }
    Ok(())
}
