//! 链路故障场景
//!
//! 随机选取一条链路使其失效，分别计算故障前后的最短路矩阵，推导受影响交换机，
//! 并以同一组参数运行全部五种方案。

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::params::SimParams;
use crate::dist::{
    CdfPoint, Pareto, RngSampler, Sampler, compute_cdf, pareto_cdf_curve, pareto_percentile,
    percentile,
};
use crate::error::{Result, SimError};
use crate::path::{build_link_matrix, switches_to_update};
use crate::replication::{LatencySample, Scheme, no_controller};
use crate::topo::{DirectedLink, SwitchId, Topology};

/// 单个方案的摘要：中位数、99.9 百分位与经验 CDF
#[derive(Debug, Clone, Serialize)]
pub struct SchemeSummary {
    pub scheme: Scheme,
    pub label: &'static str,
    pub samples: usize,
    pub p50: f64,
    pub p999: f64,
    pub cdf: Vec<CdfPoint>,
}

impl SchemeSummary {
    fn new(scheme: Scheme, totals: &[f64]) -> Self {
        Self {
            scheme,
            label: scheme.label(),
            samples: totals.len(),
            p50: percentile(totals, 0.5),
            p999: percentile(totals, 0.999),
            cdf: compute_cdf(totals),
        }
    }
}

/// 一次场景运行的结果（只读快照）
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub num_switches: usize,
    pub failed_link: Option<DirectedLink>,
    pub switches_to_update: Vec<SwitchId>,
    /// 交给控制器方案的交换机数（一致性更新时扣除入口交换机）
    pub core_switches_to_update: usize,
    pub edge_switches_to_update: usize,
    pub no_controller: Vec<f64>,
    pub single_controller: Vec<LatencySample>,
    pub one_phase_commit: Vec<LatencySample>,
    pub two_phase_commit: Vec<LatencySample>,
    pub paxos_commit: Vec<LatencySample>,
    pub summaries: Vec<SchemeSummary>,
}

impl ScenarioResult {
    fn empty(num_switches: usize) -> Self {
        let mut result = Self {
            num_switches,
            failed_link: None,
            switches_to_update: Vec::new(),
            core_switches_to_update: 0,
            edge_switches_to_update: 0,
            no_controller: Vec::new(),
            single_controller: Vec::new(),
            one_phase_commit: Vec::new(),
            two_phase_commit: Vec::new(),
            paxos_commit: Vec::new(),
            summaries: Vec::new(),
        };
        result.summaries = result.summarize();
        result
    }

    pub fn samples(&self, scheme: Scheme) -> Option<&[LatencySample]> {
        match scheme {
            Scheme::NoController => None,
            Scheme::SingleController => Some(&self.single_controller),
            Scheme::OnePhaseCommit => Some(&self.one_phase_commit),
            Scheme::TwoPhaseCommit => Some(&self.two_phase_commit),
            Scheme::PaxosCommit => Some(&self.paxos_commit),
        }
    }

    /// 方案的总延迟序列（保持插入顺序）
    pub fn totals(&self, scheme: Scheme) -> Vec<f64> {
        match self.samples(scheme) {
            Some(samples) => samples.iter().map(|s| s.total).collect(),
            None => self.no_controller.clone(),
        }
    }

    pub fn summary(&self, scheme: Scheme) -> Option<&SchemeSummary> {
        self.summaries.iter().find(|s| s.scheme == scheme)
    }

    fn summarize(&self) -> Vec<SchemeSummary> {
        Scheme::ALL
            .iter()
            .map(|&scheme| SchemeSummary::new(scheme, &self.totals(scheme)))
            .collect()
    }
}

/// 去掉故障链路的所有副本（两个方向）
pub fn remove_link(links: &[DirectedLink], failed: DirectedLink) -> Vec<DirectedLink> {
    links
        .iter()
        .filter(|l| !l.same_endpoints(&failed))
        .copied()
        .collect()
}

/// 均匀随机选取故障链路
pub fn pick_failed_link(topology: &Topology, sampler: &mut impl Sampler) -> Result<DirectedLink> {
    if topology.is_empty() {
        return Err(SimError::EmptyTopology);
    }
    Ok(topology.links[sampler.pick(topology.links.len())])
}

/// 从场景生成器派生一个独立的子生成器
fn fork(rng: &mut impl RngCore) -> RngSampler<StdRng> {
    RngSampler::new(StdRng::seed_from_u64(rng.next_u64()))
}

/// 随机选取一条链路失效并运行全部方案
///
/// 拓扑没有链路时不视为错误，返回空结果。
pub fn simulate_link_failure<R: Rng>(
    topology: &Topology,
    params: &SimParams,
    rng: &mut R,
) -> Result<ScenarioResult> {
    params.validate()?;
    let failed = match pick_failed_link(topology, &mut RngSampler::new(&mut *rng)) {
        Ok(link) => link,
        Err(SimError::EmptyTopology) => {
            warn!(num_switches = topology.num_switches, "⚠️ 拓扑没有链路，跳过故障场景");
            return Ok(ScenarioResult::empty(topology.num_switches));
        }
        Err(e) => return Err(e),
    };
    simulate_failure_of(topology, params, failed, |_| fork(&mut *rng))
}

/// 指定故障链路运行全部方案，`sampler_for` 为每个方案提供独立的随机源
#[tracing::instrument(skip(topology, params, failed, sampler_for), fields(kind = %topology.kind, n = topology.num_switches, failed = %failed))]
pub fn simulate_failure_of<S: Sampler>(
    topology: &Topology,
    params: &SimParams,
    failed: DirectedLink,
    mut sampler_for: impl FnMut(Scheme) -> S,
) -> Result<ScenarioResult> {
    let delays = params.delay_model()?;
    let n = topology.num_switches;
    if failed.src.0 >= n || failed.dest.0 >= n {
        return Err(SimError::topology(format!(
            "failed link {failed} out of range for {n} switches"
        )));
    }
    info!("▶️  开始链路故障场景");

    let after_links = remove_link(&topology.links, failed);
    let mut before = build_link_matrix(n, &topology.links);
    let mut after = build_link_matrix(n, &after_links);
    let affected = switches_to_update(&mut before, &mut after);

    let (core, edge) = if params.consistent_updates && !affected.is_empty() {
        (affected.len() - 1, 1)
    } else {
        (affected.len(), 0)
    };
    debug!(
        removed = topology.links.len() - after_links.len(),
        affected = affected.len(),
        core,
        edge,
        "受影响交换机"
    );

    let iterations = params.iterations;
    let nc = params.num_controllers;
    let no_ctrl = no_controller(
        failed,
        &after,
        &affected,
        &delays,
        iterations,
        &mut sampler_for(Scheme::NoController),
    );
    let mut run = |scheme: Scheme| {
        scheme
            .run_controller(core, nc, &delays, iterations, &mut sampler_for(scheme))
            .unwrap_or_default()
    };
    let single = run(Scheme::SingleController);
    let one_pc = run(Scheme::OnePhaseCommit);
    let two_pc = run(Scheme::TwoPhaseCommit);
    let paxos = run(Scheme::PaxosCommit);

    let mut result = ScenarioResult {
        num_switches: n,
        failed_link: Some(failed),
        switches_to_update: affected,
        core_switches_to_update: core,
        edge_switches_to_update: edge,
        no_controller: no_ctrl,
        single_controller: single,
        one_phase_commit: one_pc,
        two_phase_commit: two_pc,
        paxos_commit: paxos,
        summaries: Vec::new(),
    };
    result.summaries = result.summarize();

    info!("✅ 链路故障场景完成");
    Ok(result)
}

/// 单个延迟分布的摘要
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSummary {
    pub name: &'static str,
    pub dist: Pareto,
    pub expected: f64,
    pub p50: f64,
    pub p999: f64,
    pub curve: Vec<CdfPoint>,
}

/// 四类延迟分布各自的百分位（Monte-Carlo 近似）与解析 CDF 曲线
pub fn parameter_summaries(
    params: &SimParams,
    sampler: &mut impl Sampler,
) -> Result<Vec<ParameterSummary>> {
    let delays = params.delay_model()?;
    let named = [
        ("read", delays.read),
        ("write", delays.write),
        ("switch_network", delays.switch_net),
        ("controller_network", delays.controller_net),
    ];
    Ok(named
        .into_iter()
        .map(|(name, dist)| ParameterSummary {
            name,
            dist,
            expected: dist.expected(),
            p50: pareto_percentile(dist, 0.5, sampler),
            p999: pareto_percentile(dist, 0.999, sampler),
            curve: pareto_cdf_curve(dist),
        })
        .collect())
}
