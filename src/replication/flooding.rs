//! 无控制器：链路状态泛洪
//!
//! 故障链路的两个端点并行泛洪链路状态，每跳一次独立延迟；收敛时间取两端
//! 各自到最远受影响交换机的累计延迟的较大者。

use crate::dist::Sampler;
use crate::path::{DistanceMatrix, links_on_path};
use crate::topo::{DirectedLink, SwitchId};
use tracing::{debug, info};

use super::model::DelayModel;

/// 端点到受影响交换机的最大跳数（基于故障后的矩阵），不可达计 0 跳
fn max_hops(from: SwitchId, affected: &[SwitchId], after: &DistanceMatrix) -> usize {
    affected
        .iter()
        .map(|&sw| links_on_path(from, sw, after).len())
        .max()
        .unwrap_or(0)
}

#[tracing::instrument(skip(failed, after, affected, delays, sampler), fields(failed = %failed, affected = affected.len()))]
pub fn no_controller(
    failed: DirectedLink,
    after: &DistanceMatrix,
    affected: &[SwitchId],
    delays: &DelayModel,
    iterations: usize,
    sampler: &mut impl Sampler,
) -> Vec<f64> {
    let src_hops = max_hops(failed.src, affected, after);
    let dest_hops = max_hops(failed.dest, affected, after);
    debug!(src_hops, dest_hops, "泛洪跳数");

    // 逐跳延迟沿用交换机网络延迟分布
    let hop = delays.switch_net;
    let samples: Vec<f64> = (0..iterations)
        .map(|_| {
            let src_latency: f64 = (0..src_hops).map(|_| sampler.pareto(hop)).sum();
            let dest_latency: f64 = (0..dest_hops).map(|_| sampler.pareto(hop)).sum();
            src_latency.max(dest_latency)
        })
        .collect();

    info!(samples = samples.len(), "✅ 泛洪方案完成");
    samples
}
