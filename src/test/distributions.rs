use crate::dist::{
    Pareto, RngSampler, Sampler, compute_cdf, exponential_cdf, exponential_expected,
    exponential_pdf, pareto_cdf, pareto_cdf_curve, pareto_expected, pareto_pdf, pareto_percentile,
    pareto_percentile_iterations, percentile, round_to,
};
use crate::error::SimError;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::ConstSampler;

/// 固定返回同一个均匀数的采样器
struct FixedUniform(f64);

impl Sampler for FixedUniform {
    fn uniform(&mut self) -> f64 {
        self.0
    }

    fn pick(&mut self, _n: usize) -> usize {
        0
    }
}

fn seeded(seed: u64) -> RngSampler<StdRng> {
    RngSampler::new(StdRng::seed_from_u64(seed))
}

#[test]
fn pareto_cdf_is_zero_at_xmin_and_non_decreasing() {
    for (alpha, xmin) in [(2.5, 0.5), (3.35, 1.68), (0.7, 4.0)] {
        assert_eq!(pareto_cdf(alpha, xmin, xmin), 0.0);
        assert_eq!(pareto_cdf(alpha, xmin, xmin / 2.0), 0.0);
        let mut prev = 0.0;
        for i in 0..200 {
            let t = i as f64 * 0.25;
            let c = pareto_cdf(alpha, xmin, t);
            assert!(c >= prev, "cdf decreased at t={t} for ({alpha},{xmin})");
            assert!((0.0..=1.0).contains(&c));
            prev = c;
        }
    }
}

#[test]
fn pareto_closed_forms() {
    assert_eq!(pareto_pdf(2.0, 1.0, 0.5), 0.0);
    assert!((pareto_pdf(2.0, 1.0, 1.0) - 2.0).abs() < 1e-12);
    assert!((pareto_cdf(2.0, 1.0, 2.0) - 0.75).abs() < 1e-12);
    assert_eq!(pareto_expected(1.0, 1.0), f64::INFINITY);
    assert!((pareto_expected(2.0, 1.5) - 3.0).abs() < 1e-12);
}

#[test]
fn exponential_closed_forms() {
    assert_eq!(exponential_cdf(1.5, 0.0), 0.0);
    assert!((exponential_pdf(2.0, 0.0) - 2.0).abs() < 1e-12);
    assert_eq!(exponential_expected(4.0), 0.25);
    assert_eq!(FixedUniform(0.0).exponential(3.0), 0.0);
    let x = FixedUniform(0.5).exponential(2.0);
    assert!((exponential_cdf(2.0, x) - 0.5).abs() < 1e-12);
}

#[test]
fn pareto_rejects_non_positive_parameters() {
    for (alpha, xmin) in [(0.0, 1.0), (-1.0, 1.0), (1.0, 0.0), (1.0, -2.0), (f64::NAN, 1.0)] {
        assert!(
            matches!(Pareto::new(alpha, xmin), Err(SimError::InvalidParameter { .. })),
            "({alpha},{xmin}) accepted"
        );
    }
}

#[test]
fn pareto_inverse_matches_sampling_formula() {
    let p = Pareto::new(1.0, 1.0).unwrap();
    assert!((p.inverse(0.0) - 1.0).abs() < 1e-12);
    assert!((p.inverse(0.75) - 2.0).abs() < 1e-12);
    assert!((FixedUniform(0.75).pareto(p) - 2.0).abs() < 1e-12);
}

#[test]
fn seeded_samplers_are_reproducible() {
    let p = Pareto::new(2.5, 0.5).unwrap();
    let mut a = seeded(42);
    let mut b = seeded(42);
    for _ in 0..100 {
        let x = a.pareto(p);
        assert_eq!(x, b.pareto(p));
        assert!(x.is_finite() && x > 0.0);
        let i = a.pick(7);
        assert_eq!(i, b.pick(7));
        assert!(i < 7);
    }
}

#[test]
fn cdf_has_one_point_per_sample_ending_at_one() {
    let samples = [3.0, 1.0, 2.0, 2.0, 5.0];
    let cdf = compute_cdf(&samples);
    assert_eq!(cdf.len(), 5);
    assert!(cdf.windows(2).all(|w| w[0].value <= w[1].value));
    assert!(cdf.windows(2).all(|w| w[0].probability < w[1].probability));
    assert_eq!(cdf[0].value, 1.0);
    assert!((cdf[0].probability - 0.2).abs() < 1e-12);
    assert_eq!(cdf.last().unwrap().probability, 1.0);
    assert!(compute_cdf(&[]).is_empty());
}

#[test]
fn percentile_indexes_sorted_samples_and_clamps() {
    assert_eq!(percentile(&[], 0.5), 0.0);
    let samples = [7.0, 3.0, 10.0, 1.0, 5.0, 2.0, 9.0, 4.0, 8.0, 6.0];
    assert_eq!(percentile(&samples, 0.5), 6.0);
    assert_eq!(percentile(&samples, 0.0), 1.0);
    assert_eq!(percentile(&samples, 0.999), 10.0);
    assert_eq!(percentile(&samples, 1.0), 10.0);
    assert_eq!(percentile(&[4.0], 0.9999), 4.0);
}

#[test]
fn percentile_is_monotone_in_p() {
    let p = Pareto::new(2.5, 0.5).unwrap();
    let mut s = seeded(7);
    let samples: Vec<f64> = (0..2000).map(|_| s.pareto(p)).collect();
    assert!(percentile(&samples, 0.5) <= percentile(&samples, 0.999));
    assert!(percentile(&samples, 0.1) <= percentile(&samples, 0.5));
}

#[test]
fn pareto_percentile_iteration_heuristic() {
    assert_eq!(pareto_percentile_iterations(0.5), 10_000);
    assert_eq!(pareto_percentile_iterations(0.999), 10_000);
    assert_eq!(pareto_percentile_iterations(0.99999), 100_000);
    assert_eq!(pareto_percentile_iterations(1.0), 100_000);
}

#[test]
fn pareto_percentile_uses_empirical_samples() {
    let p = Pareto::new(3.8, 1.55).unwrap();
    let mut c = ConstSampler::new(2.0);
    assert_eq!(pareto_percentile(p, 0.999, &mut c), 2.0);
    assert_eq!(c.pareto_draws, 10_000);

    let mut s = seeded(1);
    let p50 = pareto_percentile(p, 0.5, &mut s);
    let p999 = pareto_percentile(p, 0.999, &mut s);
    assert!(p50 >= p.inverse(0.0), "p50 below distribution minimum");
    assert!(p50 <= p999);
}

#[test]
fn pareto_cdf_curve_spans_chart_range() {
    let p = Pareto::new(2.5, 0.5).unwrap();
    let curve = pareto_cdf_curve(p);
    assert_eq!(curve.len(), 64);
    assert_eq!(curve[0].value, 0.0);
    assert_eq!(curve[0].probability, 0.0);
    assert_eq!(curve[63].value, 31.5);
    assert!(curve.windows(2).all(|w| w[0].probability <= w[1].probability));
}

#[test]
fn round_to_decimals() {
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert_eq!(round_to(2.005, 0), 2.0);
    assert_eq!(round_to(1.25, 1), 1.3);
}
