//! 最短路与路由 DAG 模块
//!
//! 与按跳数 BFS 的 ECMP 路由不同，这里保留每条最短路的最后一跳，
//! 以便从矩阵还原路径、构造每个目的的 DAG 并比较拓扑变化前后的差异。

mod dag;
mod matrix;
mod shortest;

pub use dag::{dags, link_set_difference, links_on_path, switches_to_update};
pub use matrix::{DistanceMatrix, LINK_COST, PathCell, build_link_matrix, has_no_links};
pub use shortest::{converged_link_matrix, floyd_warshall};
