//! 延迟模型与样本类型

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dist::{Pareto, Sampler};

/// 四类消息延迟分布
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayModel {
    /// 控制器读延迟（各方案未使用，仅用于参数统计）
    pub read: Pareto,
    /// 控制器写/提交延迟
    pub write: Pareto,
    /// 控制器到交换机的网络延迟
    pub switch_net: Pareto,
    /// 控制器之间的网络延迟
    pub controller_net: Pareto,
}

/// 一次迭代的结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencySample {
    pub total: f64,
    pub controller_overhead: f64,
    pub exchange_overhead: f64,
}

impl LatencySample {
    pub fn new(controller_overhead: f64, exchange_overhead: f64) -> Self {
        Self {
            total: controller_overhead + exchange_overhead,
            controller_overhead,
            exchange_overhead,
        }
    }
}

/// 控制面方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    NoController,
    SingleController,
    OnePhaseCommit,
    TwoPhaseCommit,
    PaxosCommit,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::NoController,
        Scheme::SingleController,
        Scheme::OnePhaseCommit,
        Scheme::TwoPhaseCommit,
        Scheme::PaxosCommit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scheme::NoController => "Fully Distributed",
            Scheme::SingleController => "Single Controller",
            Scheme::OnePhaseCommit => "Master/Backup(s) with One-Phase Commit",
            Scheme::TwoPhaseCommit => "Master/Backup(s) with Two-Phase Commit",
            Scheme::PaxosCommit => "Paxos Replicated State Machines",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scheme::NoController => "no_controller",
            Scheme::SingleController => "single_controller",
            Scheme::OnePhaseCommit => "one_phase_commit",
            Scheme::TwoPhaseCommit => "two_phase_commit",
            Scheme::PaxosCommit => "paxos_commit",
        };
        f.write_str(s)
    }
}

/// 多数派 `floor(N / 2) + 1`（含发起者自身）
pub fn quorum(num_controllers: usize) -> usize {
    num_controllers / 2 + 1
}

/// `count` 次独立抽样的最大值，`count` 必须为正
pub(crate) fn slowest(dist: Pareto, count: usize, sampler: &mut impl Sampler) -> f64 {
    debug_assert!(count > 0, "max over an empty fan-out");
    (0..count)
        .map(|_| sampler.pareto(dist))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// 向 `S` 个交换机下发更新并等待最慢者；`S == 0` 时无此项
pub(crate) fn network_update(s: usize, delays: &DelayModel, sampler: &mut impl Sampler) -> f64 {
    if s == 0 {
        return 0.0;
    }
    slowest(delays.switch_net, s, sampler)
}

/// 一轮扇出：向 `N - 1` 个副本发请求，等待其中 `Q - 1` 个应答
#[derive(Debug, Clone, Copy)]
pub(crate) struct Round {
    pub requests: f64,
    pub responses: f64,
}

pub(crate) fn fan_out(
    num_controllers: usize,
    dist: Pareto,
    sampler: &mut impl Sampler,
) -> Round {
    let peers = num_controllers - 1;
    let acks = quorum(num_controllers) - 1;
    let mut requests = f64::NEG_INFINITY;
    let mut responses = f64::NEG_INFINITY;
    for j in 1..=peers {
        requests = requests.max(sampler.pareto(dist));
        if j <= acks {
            responses = responses.max(sampler.pareto(dist));
        }
    }
    Round {
        requests,
        responses,
    }
}
