//! 拓扑生成模块
//!
//! 给定交换机数与拓扑形状，生成单向链路列表。生成器不去重链路。

mod fat_tree;
mod link;
mod regular;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimError};

pub use fat_tree::{FatTreeLayout, fat_tree, pods_to_switches, switches_to_pods};
pub use link::{DirectedLink, SwitchId};
pub use regular::{mesh, ring, star};

/// 拓扑形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    Mesh,
    Ring,
    Star,
    FatTree,
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopologyKind::Mesh => "mesh",
            TopologyKind::Ring => "ring",
            TopologyKind::Star => "star",
            TopologyKind::FatTree => "fat_tree",
        };
        f.write_str(s)
    }
}

impl FromStr for TopologyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mesh" => Ok(TopologyKind::Mesh),
            "ring" => Ok(TopologyKind::Ring),
            "star" => Ok(TopologyKind::Star),
            "fat_tree" | "fat-tree" | "fattree" => Ok(TopologyKind::FatTree),
            other => Err(SimError::topology(format!("unknown topology kind `{other}`"))),
        }
    }
}

/// 拓扑：交换机数 + 单向链路
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub kind: TopologyKind,
    pub num_switches: usize,
    pub links: Vec<DirectedLink>,
}

impl Topology {
    pub fn new(kind: TopologyKind, num_switches: usize, links: Vec<DirectedLink>) -> Self {
        Self {
            kind,
            num_switches,
            links,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, link: &DirectedLink) -> bool {
        self.links.contains(link)
    }
}

/// 按形状与规模生成拓扑
///
/// fat-tree 的实际交换机数可能与 `size` 不同，见 [`fat_tree`]。
pub fn generate_topology(kind: TopologyKind, size: usize) -> Result<Topology> {
    match kind {
        TopologyKind::Mesh => Ok(mesh(size)),
        TopologyKind::Ring => Ok(ring(size)),
        TopologyKind::Star => Ok(star(size)),
        TopologyKind::FatTree => fat_tree(size),
    }
}

/// 预置拓扑（与交互页面的下拉列表一致）
pub fn default_topologies() -> Vec<(&'static str, Topology)> {
    vec![
        ("20-switch mesh", mesh(20)),
        ("20-switch ring", ring(20)),
        ("20-switch star", star(20)),
        ("4-pod fat-tree", fat_tree::build_fat_tree(4)),
    ]
}
