//! 距离矩阵
//!
//! 行为源、列为目的，每格为 `(距离, 最后一跳)`。

use crate::topo::{DirectedLink, SwitchId};

/// 直连链路代价（跳数的代理，与物理距离无关）
pub const LINK_COST: f64 = 100.0;

/// 矩阵中的一格
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCell {
    /// 最短距离，不可达为 `+inf`
    pub distance: f64,
    /// 路径上到达目的前的最后一个交换机，不可达为 `None`
    pub last_hop: Option<SwitchId>,
}

impl PathCell {
    pub const UNREACHABLE: PathCell = PathCell {
        distance: f64::INFINITY,
        last_hop: None,
    };

    pub fn is_reachable(&self) -> bool {
        self.last_hop.is_some() && self.distance.is_finite()
    }
}

/// 全源最短路矩阵
///
/// 每个实例只归创建它的计算所有；故障前后分别持有独立实例。
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<PathCell>>,
}

impl DistanceMatrix {
    /// 直接由行构造，不做校验（形状错误会在 [`super::floyd_warshall`] 处断言失败）
    pub fn from_rows(rows: Vec<Vec<PathCell>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, src: SwitchId, dest: SwitchId) -> PathCell {
        self.rows[src.0][dest.0]
    }

    pub fn distance(&self, src: SwitchId, dest: SwitchId) -> f64 {
        self.rows[src.0][dest.0].distance
    }

    pub fn last_hop(&self, src: SwitchId, dest: SwitchId) -> Option<SwitchId> {
        self.rows[src.0][dest.0].last_hop
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<PathCell>] {
        &mut self.rows
    }

    /// 方阵且对角线为 `(0, 自身)`
    pub(crate) fn assert_well_formed(&self) {
        let n = self.rows.len();
        for (i, row) in self.rows.iter().enumerate() {
            assert_eq!(row.len(), n, "distance matrix row {i} is not square");
            let diag = row[i];
            assert!(
                diag.distance == 0.0 && diag.last_hop == Some(SwitchId(i)),
                "distance matrix diagonal ({i},{i}) must be (0, {i}), got {diag:?}"
            );
        }
    }
}

/// 由链路构造初始矩阵：对角线 `(0, i)`，直连 `(LINK_COST, src)`，其余不可达
///
/// 重复链路只会以相同代价覆盖；自环被忽略以保持对角线不变。
pub fn build_link_matrix(num_switches: usize, links: &[DirectedLink]) -> DistanceMatrix {
    let mut rows = vec![vec![PathCell::UNREACHABLE; num_switches]; num_switches];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = PathCell {
            distance: 0.0,
            last_hop: Some(SwitchId(i)),
        };
    }
    for link in links {
        let (s, d) = (link.src.0, link.dest.0);
        assert!(
            s < num_switches && d < num_switches,
            "link {link} out of range for {num_switches} switches"
        );
        if s == d {
            continue;
        }
        rows[s][d] = PathCell {
            distance: LINK_COST,
            last_hop: Some(link.src),
        };
    }
    DistanceMatrix { rows }
}

/// 矩阵中是否不存在任何链路（所有非对角格均不可达）
pub fn has_no_links(matrix: &DistanceMatrix) -> bool {
    matrix.rows.iter().enumerate().all(|(i, row)| {
        row.iter()
            .enumerate()
            .all(|(j, cell)| i == j || !cell.is_reachable())
    })
}
