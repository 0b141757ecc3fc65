//! 随机分布模块
//!
//! 延迟模型使用的重尾分布、抽样接口与经验统计。

mod pareto;
mod sampler;
mod stats;

pub use pareto::{
    Pareto, exponential_cdf, exponential_expected, exponential_pdf, pareto_cdf, pareto_expected,
    pareto_pdf,
};
pub use sampler::{RngSampler, Sampler};
pub use stats::{
    CdfPoint, compute_cdf, pareto_cdf_curve, pareto_percentile, pareto_percentile_iterations,
    percentile, round_to,
};
