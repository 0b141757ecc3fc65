//! 经验分布统计：CDF 点、百分位

use serde::{Deserialize, Serialize};

use super::pareto::Pareto;
use super::sampler::Sampler;

/// CDF 上的一点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdfPoint {
    pub value: f64,
    pub probability: f64,
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut v = samples.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// 经验 CDF：升序排列，第 `i` 个点的累计概率为 `(i + 1) / n`
pub fn compute_cdf(samples: &[f64]) -> Vec<CdfPoint> {
    let n = samples.len() as f64;
    sorted(samples)
        .into_iter()
        .enumerate()
        .map(|(i, value)| CdfPoint {
            value,
            probability: (i + 1) as f64 / n,
        })
        .collect()
}

/// 经验百分位：升序后取下标 `floor(n * p)`，越界时夹到 `[0, n - 1]`
///
/// 空输入返回 0。
pub fn percentile(samples: &[f64], p: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let v = sorted(samples);
    let idx = ((v.len() as f64) * p).floor();
    // NaN 与负数经 `as usize` 饱和为 0
    let idx = (idx as usize).min(v.len() - 1);
    v[idx]
}

/// 对 Pareto 分布抽样 `ceil(clamp(1 / (1 - p), 10_000, 100_000))` 次后取经验百分位
pub fn pareto_percentile(dist: Pareto, p: f64, sampler: &mut impl Sampler) -> f64 {
    let iterations = pareto_percentile_iterations(p);
    let samples: Vec<f64> = (0..iterations).map(|_| sampler.pareto(dist)).collect();
    percentile(&samples, p)
}

pub fn pareto_percentile_iterations(p: f64) -> usize {
    (1.0 / (1.0 - p)).max(10_000.0).min(100_000.0).ceil() as usize
}

/// 解析 CDF 曲线，`t = 0, 0.5, .., 31.5`
pub fn pareto_cdf_curve(dist: Pareto) -> Vec<CdfPoint> {
    (0..64)
        .map(|i| {
            let t = i as f64 * 0.5;
            CdfPoint {
                value: t,
                probability: dist.cdf(t),
            }
        })
        .collect()
}

/// 四舍五入到 `decimals` 位小数
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
