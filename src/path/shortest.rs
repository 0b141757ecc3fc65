//! 全源最短路
//!
//! 对每个源行做一次 Dijkstra 式松弛：反复选取距离最小的未完成列，经由它松弛
//! 其余未完成列。已完成的行（下标小于当前行）可直接复用其最后一跳。

use super::matrix::{DistanceMatrix, PathCell, build_link_matrix};
use crate::topo::{DirectedLink, SwitchId};
use tracing::{debug, trace};

/// 原地计算所有源的最短距离与最后一跳
///
/// 对已收敛矩阵再次运行不会改变任何格。
#[tracing::instrument(skip(matrix), fields(n = matrix.len()))]
pub fn floyd_warshall(matrix: &mut DistanceMatrix) {
    matrix.assert_well_formed();
    let n = matrix.len();
    let rows = matrix.rows_mut();
    let mut completed = vec![false; n];

    for i in 0..n {
        completed.fill(false);
        completed[i] = true;
        let mut done = 1;

        while done < n {
            // 距离相同时先遍历到的列胜出
            let mut nearest: Option<usize> = None;
            let mut nearest_distance = f64::INFINITY;
            for (j, cell) in rows[i].iter().enumerate() {
                if !completed[j] && cell.distance < nearest_distance {
                    nearest = Some(j);
                    nearest_distance = cell.distance;
                }
            }
            let Some(near) = nearest else {
                trace!(row = i, reached = done, "剩余节点不可达，提前结束该行");
                break;
            };
            completed[near] = true;
            done += 1;

            for k in 0..n {
                if completed[k] {
                    continue;
                }
                let via: PathCell = rows[near][k];
                let candidate = nearest_distance + via.distance;
                if candidate < rows[i][k].distance {
                    let last_hop = if near < i {
                        via.last_hop
                    } else {
                        Some(SwitchId(near))
                    };
                    rows[i][k] = PathCell {
                        distance: candidate,
                        last_hop,
                    };
                }
            }
        }
    }

    debug!("最短路矩阵已收敛");
}

/// 构造链路矩阵并运行最短路
pub fn converged_link_matrix(num_switches: usize, links: &[DirectedLink]) -> DistanceMatrix {
    let mut matrix = build_link_matrix(num_switches, links);
    floyd_warshall(&mut matrix);
    matrix
}
