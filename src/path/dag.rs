//! 路由 DAG 与受影响交换机推导
//!
//! 每个目的交换机对应一个 DAG：所有以它为终点的最短路链路的并集。
//! 拓扑变化前后 DAG 的对称差中，各链路的源交换机即需要更新转发状态的交换机。

use std::collections::HashSet;

use super::matrix::DistanceMatrix;
use super::shortest::floyd_warshall;
use crate::topo::{DirectedLink, SwitchId};
use tracing::debug;

/// 沿最后一跳指针从 `dest` 回溯到 `src`，得到正向链路序列
///
/// 不可达或 `src == dest` 时返回空；回溯步数以矩阵规模为上限。
pub fn links_on_path(src: SwitchId, dest: SwitchId, matrix: &DistanceMatrix) -> Vec<DirectedLink> {
    let mut links = Vec::new();
    let mut to = dest;
    let mut steps = 0;
    while let Some(from) = matrix.last_hop(src, to) {
        if from == to {
            break;
        }
        if steps >= matrix.len() {
            debug!(src = %src, dest = %dest, "最后一跳指针成环，放弃该路径");
            return Vec::new();
        }
        links.push(DirectedLink { src: from, dest: to });
        to = from;
        steps += 1;
    }
    if to != src {
        // 指针链在到达 src 之前断开
        return Vec::new();
    }
    links.reverse();
    links
}

/// 每个目的交换机的最短路 DAG，按结构去重并保持首次出现顺序
pub fn dags(matrix: &DistanceMatrix) -> Vec<Vec<DirectedLink>> {
    let n = matrix.len();
    (0..n)
        .map(|dest| {
            let mut seen = HashSet::new();
            let mut dag = Vec::new();
            for src in 0..n {
                for link in links_on_path(SwitchId(src), SwitchId(dest), matrix) {
                    if seen.insert(link) {
                        dag.push(link);
                    }
                }
            }
            dag
        })
        .collect()
}

/// 只出现在其中一侧的链路：先 `a` 独有，再 `b` 独有
pub fn link_set_difference(a: &[DirectedLink], b: &[DirectedLink]) -> Vec<DirectedLink> {
    let in_a: HashSet<&DirectedLink> = a.iter().collect();
    let in_b: HashSet<&DirectedLink> = b.iter().collect();
    a.iter()
        .filter(|l| !in_b.contains(l))
        .chain(b.iter().filter(|l| !in_a.contains(l)))
        .copied()
        .collect()
}

/// 拓扑变化后需要更新的交换机（去重，按首次出现顺序）
///
/// 两个矩阵先各自收敛（已收敛时不变），随后逐目的比较 DAG。
#[tracing::instrument(skip(before, after), fields(n = before.len()))]
pub fn switches_to_update(before: &mut DistanceMatrix, after: &mut DistanceMatrix) -> Vec<SwitchId> {
    assert_eq!(
        before.len(),
        after.len(),
        "before/after matrices must cover the same switches"
    );
    floyd_warshall(before);
    floyd_warshall(after);
    let before_dags = dags(before);
    let after_dags = dags(after);

    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for (b, a) in before_dags.iter().zip(&after_dags) {
        for link in link_set_difference(b, a) {
            if seen.insert(link.src) {
                result.push(link.src);
            }
        }
    }

    debug!(affected = result.len(), "受影响交换机已推导");
    result
}
