//! 副本方案模拟模块
//!
//! 五种控制面方案各自是一个 Monte-Carlo 模型：每次迭代独立抽样，输出按插入
//! 顺序排列的样本序列。控制器方案把控制器开销（下发到交换机，取最慢者）与
//! 控制器间交换开销相加作为总延迟。

mod commit;
mod flooding;
mod model;
mod paxos;
mod single;

pub use commit::{one_phase_commit, two_phase_commit};
pub use flooding::no_controller;
pub use model::{DelayModel, LatencySample, Scheme, quorum};
pub use paxos::paxos_commit;
pub use single::single_controller;

use crate::dist::Sampler;

impl Scheme {
    /// 运行控制器方案；[`Scheme::NoController`] 需要拓扑信息，应调用 [`no_controller`]
    pub fn run_controller(
        &self,
        s: usize,
        n: usize,
        delays: &DelayModel,
        iterations: usize,
        sampler: &mut impl Sampler,
    ) -> Option<Vec<LatencySample>> {
        match self {
            Scheme::NoController => None,
            Scheme::SingleController => Some(single_controller(s, n, delays, iterations, sampler)),
            Scheme::OnePhaseCommit => Some(one_phase_commit(s, n, delays, iterations, sampler)),
            Scheme::TwoPhaseCommit => Some(two_phase_commit(s, n, delays, iterations, sampler)),
            Scheme::PaxosCommit => Some(paxos_commit(s, n, delays, iterations, sampler)),
        }
    }
}
