//! 单控制器：计算、本地提交，然后下发到所有交换机

use crate::dist::Sampler;
use tracing::info;

use super::model::{DelayModel, LatencySample, network_update};

/// 控制器数 `N` 不参与计算
#[tracing::instrument(skip(delays, sampler))]
pub fn single_controller(
    s: usize,
    n: usize,
    delays: &DelayModel,
    iterations: usize,
    sampler: &mut impl Sampler,
) -> Vec<LatencySample> {
    let samples: Vec<LatencySample> = (0..iterations)
        .map(|_| {
            let mut controller_overhead = sampler.pareto(delays.switch_net);
            let exchange_overhead = sampler.pareto(delays.write);
            controller_overhead += network_update(s, delays, sampler);
            LatencySample::new(controller_overhead, exchange_overhead)
        })
        .collect();

    info!(samples = samples.len(), "✅ 单控制器方案完成");
    samples
}
