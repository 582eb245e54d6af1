//! Integration tests for the nested model comparison

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use trend_fit::{
    analyze_trend, LinearRegression, TrendAnalysis, TrendAnalyzer, TrendAnalyzerBuilder,
    TrendParameters,
};

const REFERENCE_X: [i32; 6] = [0, 1, 2, 3, 4, 5];
const REFERENCE_Y: [i32; 6] = [0, 27, 8, -27, -64, 125];

fn reference_analysis() -> TrendAnalysis {
    analyze_trend(&REFERENCE_X, &REFERENCE_Y, 3).unwrap()
}

fn noisy_samples(n: usize, f: impl Fn(f64) -> f64, sigma: f64, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    let x: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64 * 10.0).collect();
    let y = x.iter().map(|&v| f(v) + noise.sample(&mut rng)).collect();
    (x, y)
}

#[test]
fn test_reference_sample_structure() {
    let results = reference_analysis();
    assert_eq!(results.sample_size, 6);
    assert_eq!(results.max_degree, 3);
    assert_eq!(results.degrees.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    let names: Vec<String> = results.iter().map(|s| s.model_name()).collect();
    assert_eq!(names, vec!["Linear", "Quadratic", "Cubic"]);

    assert_relative_eq!(results.baseline.mean, 11.5, epsilon = 1e-12);
    assert_relative_eq!(results.baseline.sse, 20449.5, epsilon = 1e-9);
}

#[test]
fn test_reference_sample_statistics() {
    let results = reference_analysis();

    let linear = results.get(1).unwrap();
    assert_relative_eq!(linear.r2(), 0.0702001097, epsilon = 1e-8);
    assert_relative_eq!(linear.sse, 19013.9428571, epsilon = 1e-6);
    assert_relative_eq!(linear.f_statistic(), 0.3020009377, epsilon = 1e-8);
    assert_relative_eq!(linear.p_value(), 0.61187, epsilon = 1e-4);

    let quadratic = results.get(2).unwrap();
    assert_relative_eq!(quadratic.r2(), 0.3872668909, epsilon = 1e-8);
    assert_relative_eq!(quadratic.f_statistic(), 1.5523893349, epsilon = 1e-7);
    assert_relative_eq!(quadratic.p_value(), 0.30122, epsilon = 1e-4);

    let cubic = results.get(3).unwrap();
    let c = cubic.polynomial.coefficients();
    assert_relative_eq!(c[0], -6.1587301587, epsilon = 1e-7);
    assert_relative_eq!(c[1], 121.0105820106, epsilon = 1e-7);
    assert_relative_eq!(c[2], -84.1825396825, epsilon = 1e-7);
    assert_relative_eq!(c[3], 12.9814814815, epsilon = 1e-7);
    assert_relative_eq!(cubic.r2(), 0.9212663639, epsilon = 1e-8);
    assert_relative_eq!(cubic.f_statistic(), 13.5647100578, epsilon = 1e-6);
    assert_relative_eq!(cubic.p_value(), 0.066456, epsilon = 1e-4);
    assert_eq!(cubic.f_test.df_numerator, 1);
    assert_eq!(cubic.f_test.df_denominator, 2);
}

#[test]
fn test_reference_sample_information_criteria() {
    let results = reference_analysis();

    let linear = results.get(1).unwrap();
    assert_relative_eq!(linear.log_likelihood(), -32.6971362624, epsilon = 1e-8);
    assert_relative_eq!(linear.aic(), 67.3942725247, epsilon = 1e-8);
    assert_relative_eq!(linear.bic(), 67.1860319940, epsilon = 1e-8);

    let cubic = results.get(3).unwrap();
    assert_relative_eq!(cubic.aic(), 56.5808789427, epsilon = 1e-7);
    assert_relative_eq!(cubic.bic(), 55.9561573504, epsilon = 1e-7);

    assert_eq!(results.best_by_aic().unwrap().degree(), 3);
    assert_eq!(results.best_by_bic().unwrap().degree(), 3);
    assert!(results.significant_degrees(0.05).is_empty());
    assert_eq!(results.significant_degrees(0.1), vec![3]);
}

#[test]
fn test_criteria_count_degree_as_parameters() {
    let results = reference_analysis();
    let n = results.sample_size as f64;
    for stats in results.iter() {
        let d = stats.degree() as f64;
        let ll = stats.log_likelihood();
        assert_relative_eq!(stats.aic(), 2.0 * d - 2.0 * ll, epsilon = 1e-10);
        assert_relative_eq!(stats.bic(), d * n.ln() - 2.0 * ll, epsilon = 1e-10);
    }

    // The constant model counts no parameters.
    let baseline = &results.baseline.criteria;
    assert_relative_eq!(baseline.aic, -2.0 * baseline.log_likelihood, epsilon = 1e-10);
    assert_relative_eq!(baseline.bic, -2.0 * baseline.log_likelihood, epsilon = 1e-10);
}

#[test]
fn test_linear_p_value_matches_slope_t_test() {
    let (x, y) = noisy_samples(30, |v| 1.5 * v + 2.0, 4.0, 7);
    let results = analyze_trend(&x, &y, 1).unwrap();
    let line = LinearRegression::new().fit(&x, &y).unwrap();

    let linear = results.get(1).unwrap();
    assert_relative_eq!(linear.p_value(), line.p_value, epsilon = 1e-7);
    assert_relative_eq!(
        linear.f_statistic(),
        line.t_statistic * line.t_statistic,
        max_relative = 1e-9
    );
    assert_relative_eq!(linear.r2(), 1.0 - line.sse / results.baseline.sse, epsilon = 1e-10);
}

#[test]
fn test_quadratic_trend_detected() {
    let (x, y) = noisy_samples(60, |v| 0.8 * v * v - 3.0 * v + 1.0, 2.0, 42);
    let results = analyze_trend(&x, &y, 4).unwrap();

    assert!(results.get(2).unwrap().p_value() < 1e-6);
    assert!(results.significant_degrees(0.001).contains(&2));
    assert!(results.best_by_aic().unwrap().degree() >= 2);
    assert!(results.best_by_bic().unwrap().degree() >= 2);

    let quadratic = results.get(2).unwrap().polynomial.coefficients().to_vec();
    assert_relative_eq!(quadratic[2], 0.8, epsilon = 0.15);
}

#[test]
fn test_r2_is_monotone_in_degree() {
    let (x, y) = noisy_samples(40, |v| (v * 0.7).sin() * 5.0, 0.5, 3);
    let results = analyze_trend(&x, &y, 6).unwrap();
    let r2: Vec<f64> = results.iter().map(|s| s.r2()).collect();
    for pair in r2.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-9, "R² decreased: {:?}", r2);
    }
    assert_eq!(results.get(6).unwrap().model_name(), "6 order model");
}

#[test]
fn test_exact_polynomial_data() {
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v * v + 1.0).collect();
    let results = analyze_trend(&x, &y, 3).unwrap();

    let quadratic = results.get(2).unwrap();
    assert_relative_eq!(quadratic.r2(), 1.0, epsilon = 1e-10);
    assert!(quadratic.p_value() < 1e-8);

    // The cubic term cannot improve an exact quadratic.
    let cubic = results.get(3).unwrap();
    assert!(cubic.p_value() >= 0.0 && cubic.p_value() <= 1.0);
}

#[test]
fn test_confidence_band_follows_parameters() {
    let params = TrendParameters {
        max_degree: 2,
        confidence_percent: 90.0,
        compute_band: true,
    };
    let results = TrendAnalyzer::new(params)
        .unwrap()
        .analyze(&REFERENCE_X, &REFERENCE_Y)
        .unwrap();
    let band = results.band.unwrap();
    assert_eq!(band.confidence_percent, 90.0);
    assert!(band.half_width > 0.0);

    let wider = TrendAnalyzerBuilder::new()
        .confidence(99.0)
        .build()
        .unwrap()
        .analyze(&REFERENCE_X, &REFERENCE_Y)
        .unwrap()
        .band
        .unwrap();
    assert!(wider.half_width > band.half_width);
}

#[test]
fn test_predict_uses_fitted_models() {
    let results = reference_analysis();
    assert_relative_eq!(results.predict(0, 100.0).unwrap(), 11.5);
    let cubic = results.get(3).unwrap();
    assert_relative_eq!(
        results.predict(3, 2.5).unwrap(),
        cubic.polynomial.evaluate(2.5)
    );
    assert!(results.predict(4, 1.0).is_none());
}

#[test]
fn test_input_validation() {
    assert!(analyze_trend(&[1.0, 2.0, 3.0], &[1.0, 2.0], 1).is_err());
    assert!(analyze_trend(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0], 0).is_err());
    assert!(analyze_trend(&[2.0, 2.0, 2.0, 2.0], &[1.0, 2.0, 4.0, 3.0], 1).is_err());
    assert!(analyze_trend(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 4.0], 1).is_err());
}

#[test]
fn test_display_lists_every_model() {
    let text = reference_analysis().to_string();
    assert!(text.contains("n = 6"));
    assert!(text.contains("Linear"));
    assert!(text.contains("Quadratic"));
    assert!(text.contains("Cubic"));
}

#[test]
fn test_json_round_trip() {
    let results = reference_analysis();
    let json = serde_json::to_string(&results).unwrap();
    let back: TrendAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back.degrees.len(), 3);
    assert_relative_eq!(back.get(3).unwrap().r2(), results.get(3).unwrap().r2());

    let params: TrendParameters = serde_json::from_str(r#"{"max_degree": 4}"#).unwrap();
    assert_eq!(params.max_degree, 4);
    assert_eq!(params.confidence_percent, 95.0);
}

mod properties {
    use proptest::prelude::*;
    use trend_fit::analyze_trend;

    proptest! {
        #[test]
        fn analysis_invariants(
            y in prop::collection::vec(-100.0f64..100.0, 8..30),
            max_degree in 1usize..5,
        ) {
            let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
            let mean = y.iter().sum::<f64>() / y.len() as f64;
            prop_assume!(y.iter().map(|v| (v - mean).powi(2)).sum::<f64>() > 1e-6);

            let results = analyze_trend(&x, &y, max_degree).unwrap();
            let degrees: Vec<usize> = results.degrees.keys().copied().collect();
            prop_assert_eq!(degrees, (1..=max_degree).collect::<Vec<_>>());

            let mut previous = 0.0;
            for stats in results.iter() {
                prop_assert!((0.0..=1.0).contains(&stats.p_value()));
                prop_assert!(stats.f_statistic() >= 0.0);
                prop_assert!(stats.r2() >= previous - 1e-9);
                prop_assert!(stats.r2() <= 1.0 + 1e-9);
                previous = stats.r2();
            }
        }
    }
}
