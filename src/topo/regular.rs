//! 规则拓扑：mesh / ring / star

use super::link::DirectedLink;
use super::{Topology, TopologyKind};

/// 全连接拓扑：每个有序对 `i != j` 一条链路
pub fn mesh(n: usize) -> Topology {
    let mut links = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));
    for i in 0..n {
        for j in 0..n {
            if i != j {
                links.push(DirectedLink::new(i, j));
            }
        }
    }
    Topology::new(TopologyKind::Mesh, n, links)
}

/// 单向环：`i -> (i + 1) mod n`
///
/// 单交换机时 `0 -> 0` 是自环，不生成。
pub fn ring(n: usize) -> Topology {
    let links = (0..n)
        .map(|i| DirectedLink::new(i, (i + 1) % n))
        .filter(|l| l.src != l.dest)
        .collect();
    Topology::new(TopologyKind::Ring, n, links)
}

/// 星形：hub 为 0 号交换机，与其余每个交换机双向相连
pub fn star(n: usize) -> Topology {
    let mut links = Vec::with_capacity(2 * n.saturating_sub(1));
    for i in 1..n {
        links.push(DirectedLink::new(0, i));
        links.push(DirectedLink::new(i, 0));
    }
    Topology::new(TopologyKind::Star, n, links)
}
