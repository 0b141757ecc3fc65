//! 随机数来源
//!
//! 所有随机抽样都经过 [`Sampler`]，测试可以注入常数采样器；每个仿真流程持有
//! 自己的生成器，不共享状态。

use rand::Rng;

use super::pareto::Pareto;

pub trait Sampler {
    /// `U ~ Uniform[0, 1)`
    fn uniform(&mut self) -> f64;

    /// `[0, n)` 上的均匀整数，`n` 必须为正
    fn pick(&mut self, n: usize) -> usize;

    fn pareto(&mut self, dist: Pareto) -> f64 {
        dist.inverse(self.uniform())
    }

    /// 指数分布逆 CDF 采样：`-ln(1 - U) / lambda`
    fn exponential(&mut self, lambda: f64) -> f64 {
        -(1.0 - self.uniform()).ln() / lambda
    }
}

/// 由任意 `rand::Rng` 驱动的采样器
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        self.rng.gen_range(0..n)
    }
}
