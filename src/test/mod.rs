mod distributions;
mod scenario_spec;

use crate::dist::{Pareto, Sampler};

/// 每次 Pareto 抽样都返回同一常数，并记录抽样次数
pub(crate) struct ConstSampler {
    pub value: f64,
    pub index: usize,
    pub pareto_draws: usize,
}

impl ConstSampler {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            index: 0,
            pareto_draws: 0,
        }
    }

    pub fn with_index(value: f64, index: usize) -> Self {
        Self {
            index,
            ..Self::new(value)
        }
    }
}

impl Sampler for ConstSampler {
    fn uniform(&mut self) -> f64 {
        0.0
    }

    fn pick(&mut self, n: usize) -> usize {
        self.index.min(n - 1)
    }

    fn pareto(&mut self, _dist: Pareto) -> f64 {
        self.pareto_draws += 1;
        self.value
    }
}
