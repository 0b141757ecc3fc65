//! Paxos 提交（`N` 个副本）
//!
//! 不考虑省略 Prepare 阶段的优化；leader 选举视为一次性开销，不计入。

use crate::dist::Sampler;
use tracing::{debug, info};

use super::model::{DelayModel, LatencySample, fan_out, network_update, quorum, slowest};

/// - 非共置：转发请求，Prepare/ACK，Accept/ACK，leader 选定并提交后通知所有副本，
///   提议者本地提交后下发
/// - 共置：Prepare/ACK，Accept/ACK，leader 提交后直接下发（通知异步发出）
///
/// 共置判定为 `pick(N) == 0`。`N <= 1` 时返回空序列。
#[tracing::instrument(skip(delays, sampler))]
pub fn paxos_commit(
    s: usize,
    n: usize,
    delays: &DelayModel,
    iterations: usize,
    sampler: &mut impl Sampler,
) -> Vec<LatencySample> {
    if n <= 1 {
        debug!("控制器不足两个，跳过");
        return Vec::new();
    }
    debug!(quorum = quorum(n), "Paxos 参数");

    let mut colocated_runs = 0usize;
    let samples: Vec<LatencySample> = (0..iterations)
        .map(|_| {
            let colocated = sampler.pick(n) == 0;
            let mut controller_overhead = sampler.pareto(delays.switch_net);
            let prepare = fan_out(n, delays.controller_net, sampler);
            let accept = fan_out(n, delays.controller_net, sampler);
            let notify = slowest(delays.controller_net, n - 1, sampler);

            let rounds = prepare.requests + prepare.responses + accept.requests + accept.responses;
            let mut exchange_overhead = if !colocated {
                sampler.pareto(delays.controller_net)
                    + rounds
                    + sampler.pareto(delays.write)
                    + notify
            } else {
                colocated_runs += 1;
                rounds
            };
            exchange_overhead += sampler.pareto(delays.write);

            controller_overhead += network_update(s, delays, sampler);
            LatencySample::new(controller_overhead, exchange_overhead)
        })
        .collect();

    info!(samples = samples.len(), colocated_runs, "✅ Paxos 方案完成");
    samples
}
