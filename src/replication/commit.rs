//! 主/备副本：一阶段提交与两阶段提交
//!
//! 一个 master 与 `N - 1` 个 backup。非共置时提议者（某个 backup）先把请求
//! 转发给 master；共置时 master 本身就是提议者，省去这一跳。

use crate::dist::Sampler;
use tracing::{debug, info};

use super::model::{DelayModel, LatencySample, fan_out, network_update, quorum, slowest};

/// 一阶段提交
///
/// - 非共置：转发请求给 master，master 向所有 backup 广播，提议者本地提交后下发
/// - 共置：master 广播，等待 `Q - 1` 个 backup 应答，本地提交后下发
///
/// 共置判定为 `pick(N) != 0`。`N <= 1` 时没有副本，返回空序列。
#[tracing::instrument(skip(delays, sampler))]
pub fn one_phase_commit(
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
    debug!(quorum = quorum(n), "一阶段提交参数");

    let mut colocated_runs = 0usize;
    let samples: Vec<LatencySample> = (0..iterations)
        .map(|_| {
            let colocated = sampler.pick(n) != 0;
            let mut controller_overhead = sampler.pareto(delays.switch_net);
            let round = fan_out(n, delays.controller_net, sampler);

            let mut exchange_overhead = if !colocated {
                sampler.pareto(delays.controller_net) + round.requests
            } else {
                colocated_runs += 1;
                round.requests + round.responses
            };
            exchange_overhead += sampler.pareto(delays.write);

            controller_overhead += network_update(s, delays, sampler);
            LatencySample::new(controller_overhead, exchange_overhead)
        })
        .collect();

    info!(samples = samples.len(), colocated_runs, "✅ 一阶段提交方案完成");
    samples
}

/// 两阶段提交
///
/// - 非共置：转发请求，Prepare 广播，`Q - 1` 个 Prepare ACK，master 提交并广播
///   Commit，提议者本地提交后下发
/// - 共置：Prepare 广播，`Q - 1` 个 Prepare ACK，master 提交后下发（Commit 异步发出）
///
/// 共置判定为 `pick(N) == 0`，与一阶段提交方向相反。
#[tracing::instrument(skip(delays, sampler))]
pub fn two_phase_commit(
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
    debug!(quorum = quorum(n), "两阶段提交参数");

    let mut colocated_runs = 0usize;
    let samples: Vec<LatencySample> = (0..iterations)
        .map(|_| {
            let colocated = sampler.pick(n) == 0;
            let mut controller_overhead = sampler.pareto(delays.switch_net);
            let prepare = fan_out(n, delays.controller_net, sampler);
            let commit = slowest(delays.controller_net, n - 1, sampler);

            let mut exchange_overhead = if !colocated {
                sampler.pareto(delays.controller_net)
                    + prepare.requests
                    + prepare.responses
                    + sampler.pareto(delays.write)
                    + commit
            } else {
                colocated_runs += 1;
                prepare.requests + prepare.responses
            };
            exchange_overhead += sampler.pareto(delays.write);

            controller_overhead += network_update(s, delays, sampler);
            LatencySample::new(controller_overhead, exchange_overhead)
        })
        .collect();

    info!(samples = samples.len(), colocated_runs, "✅ 两阶段提交方案完成");
    samples
}
