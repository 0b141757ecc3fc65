//! Fat-tree 拓扑构建
//!
//! 交换机编号：先按 pod 排列，每个 pod `k` 个交换机（前 `k/2` 为 aggregation，
//! 其余为 edge），最后是 `(k/2)^2` 个 core 交换机。

use super::link::{DirectedLink, SwitchId};
use super::{Topology, TopologyKind};
use crate::error::{Result, SimError};

/// 交换机数到 pod 数的换算
///
/// `num_switches = k^2 + (k/2)^2`，取满足 `k <= sqrt(4/5 * num_switches)` 的最大偶数 `k`。
pub fn switches_to_pods(num_switches: usize) -> Result<usize> {
    if num_switches < 5 {
        return Err(SimError::topology(format!(
            "fat-tree needs at least 5 switches, got {num_switches}"
        )));
    }
    // 整数判定 5k^2 <= 4n，避免浮点开方在完全平方数处的误差
    let bound = num_switches.checked_mul(4).ok_or_else(|| {
        SimError::topology(format!("fat-tree switch count {num_switches} is too large"))
    })?;
    let fits = |k: usize| {
        k.checked_mul(k)
            .and_then(|sq| sq.checked_mul(5))
            .is_some_and(|v| v <= bound)
    };
    let mut k = ((bound / 5) as f64).sqrt() as usize;
    while fits(k + 1) {
        k += 1;
    }
    while k > 0 && !fits(k) {
        k -= 1;
    }
    if k % 2 == 1 {
        k -= 1;
    }
    Ok(k)
}

/// pod 数到交换机数的换算，`k` 必须为 `>= 2` 的偶数
pub fn pods_to_switches(k: usize) -> Result<usize> {
    if k < 2 || k % 2 != 0 {
        return Err(SimError::topology(format!(
            "fat-tree pod count must be even and >= 2, got {k}"
        )));
    }
    let half = k / 2;
    k.checked_mul(k)
        .and_then(|full| full.checked_add(half * half))
        .ok_or_else(|| SimError::topology(format!("fat-tree pod count {k} is too large")))
}

/// 按 pod/角色查询交换机编号
#[derive(Debug, Clone, Copy)]
pub struct FatTreeLayout {
    pub k: usize,
}

impl FatTreeLayout {
    fn half(&self) -> usize {
        self.k / 2
    }

    pub fn agg(&self, pod: usize, agg: usize) -> SwitchId {
        debug_assert!(agg < self.half());
        SwitchId(pod * self.k + agg)
    }

    pub fn edge(&self, pod: usize, edge: usize) -> SwitchId {
        debug_assert!(edge < self.half());
        SwitchId(pod * self.k + self.half() + edge)
    }

    pub fn core(&self, index: usize) -> SwitchId {
        SwitchId(self.k * self.k + index)
    }

    pub fn num_core(&self) -> usize {
        self.half() * self.half()
    }

    pub fn num_switches(&self) -> usize {
        self.k * self.k + self.num_core()
    }
}

/// 按目标交换机数构建 fat-tree
///
/// 实际交换机数由推导出的 `k` 重建，可能小于请求值，调用方通过返回的
/// `num_switches` 获知。
pub fn fat_tree(num_switches: usize) -> Result<Topology> {
    let k = switches_to_pods(num_switches)?;
    Ok(build_fat_tree(k))
}

pub(crate) fn build_fat_tree(k: usize) -> Topology {
    assert!(k >= 2 && k % 2 == 0, "fat-tree k must be even and >= 2");

    let layout = FatTreeLayout { k };
    let half = k / 2;
    let mut links = Vec::with_capacity(2 * k * half * half + 2 * k * layout.num_core());

    for pod in 0..k {
        for agg in 0..half {
            for edge in 0..half {
                let agg_id = layout.agg(pod, agg);
                let edge_id = layout.edge(pod, edge);
                links.push(DirectedLink {
                    src: agg_id,
                    dest: edge_id,
                });
                links.push(DirectedLink {
                    src: edge_id,
                    dest: agg_id,
                });
            }
        }
    }

    for index in 0..layout.num_core() {
        let core_id = layout.core(index);
        for pod in 0..k {
            let agg_id = layout.agg(pod, index / half);
            links.push(DirectedLink {
                src: core_id,
                dest: agg_id,
            });
            links.push(DirectedLink {
                src: agg_id,
                dest: core_id,
            });
        }
    }

    Topology::new(TopologyKind::FatTree, layout.num_switches(), links)
}
