/// Integration tests for the CPS formula
use cps_calculator::cost::{compute_cps, PlatformCost};
use cps_calculator::error::CpsError;

fn sample_platforms() -> Vec<PlatformCost> {
    vec![
        PlatformCost::new("Clarifai", 30.0, 0.0088, 2.0),
        PlatformCost::new("SerpAPI", 75.0, 0.02, 2.0),
    ]
}

#[test]
fn test_concrete_scenario() {
    // fixed = 105 / 5000 = 0.021, variable = 0.0176 + 0.04 = 0.0576
    let breakdown = compute_cps(&sample_platforms(), 5000.0).unwrap();

    assert!((breakdown.fixed_cost_per_search - 0.021).abs() < 1e-12);
    assert!((breakdown.variable_cost_per_search - 0.0576).abs() < 1e-12);
    assert!((breakdown.total - 0.0786).abs() < 1e-12);
}

#[test]
fn test_order_invariance() {
    let platforms = sample_platforms();
    let mut reversed = platforms.clone();
    reversed.reverse();

    let forward = compute_cps(&platforms, 5000.0).unwrap();
    let backward = compute_cps(&reversed, 5000.0).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_doubling_volume_halves_fixed_term_only() {
    let platforms = sample_platforms();

    let base = compute_cps(&platforms, 5000.0).unwrap();
    let doubled = compute_cps(&platforms, 10000.0).unwrap();

    assert!((doubled.fixed_cost_per_search - base.fixed_cost_per_search / 2.0).abs() < 1e-12);
    assert_eq!(
        doubled.variable_cost_per_search,
        base.variable_cost_per_search
    );
}

#[test]
fn test_doubling_fixed_costs_doubles_fixed_term() {
    let platforms = sample_platforms();
    let mut scaled = platforms.clone();
    for platform in &mut scaled {
        platform.fixed_cost *= 2.0;
    }

    let base = compute_cps(&platforms, 5000.0).unwrap();
    let doubled = compute_cps(&scaled, 5000.0).unwrap();

    assert!((doubled.fixed_cost_per_search - base.fixed_cost_per_search * 2.0).abs() < 1e-12);
    assert_eq!(
        doubled.variable_cost_per_search,
        base.variable_cost_per_search
    );
}

#[test]
fn test_empty_input() {
    let result = compute_cps(&[], 5000.0);
    assert_eq!(result, Err(CpsError::EmptyInput));
    assert_eq!(result.unwrap_err().kind(), "empty_input");
}

#[test]
fn test_non_positive_volume() {
    let platforms = sample_platforms();

    for volume in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = compute_cps(&platforms, volume).unwrap_err();
        assert_eq!(err.kind(), "invalid_input", "volume {}", volume);
    }
}

#[test]
fn test_invalid_cost_attribute_names_the_platform() {
    let platforms = vec![
        PlatformCost::new("Clarifai", 30.0, 0.0088, 2.0),
        PlatformCost::new("SerpAPI", 75.0, f64::NAN, 2.0),
    ];

    let err = compute_cps(&platforms, 5000.0).unwrap_err();
    assert_eq!(err.kind(), "invalid_input");
    assert!(err.to_string().contains("SerpAPI"));
    assert!(err.to_string().contains("cost_per_call"));
}

#[test]
fn test_zero_cost_platform_contributes_nothing() {
    let mut platforms = sample_platforms();
    platforms.push(PlatformCost::new("Supabase", 0.0, 0.0, 0.0));

    let base = compute_cps(&sample_platforms(), 5000.0).unwrap();
    let extended = compute_cps(&platforms, 5000.0).unwrap();

    assert_eq!(base, extended);
}
