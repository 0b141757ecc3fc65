use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::orchestrator::{ScenarioResult, simulate_link_failure};
use super::params::SimParams;
use crate::error::{Result, SimError};
use crate::topo::{Topology, TopologyKind, generate_topology, pods_to_switches};

/// 场景描述文件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub topology: TopologySpec,
    #[serde(default)]
    pub params: SimParams,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    Mesh {
        switches: usize,
    },
    Ring {
        switches: usize,
    },
    Star {
        switches: usize,
    },
    /// `pods` 优先于 `switches`
    FatTree {
        #[serde(default)]
        switches: Option<usize>,
        #[serde(default)]
        pods: Option<usize>,
    },
}

impl TopologySpec {
    pub fn new(kind: TopologyKind, switches: usize) -> Self {
        match kind {
            TopologyKind::Mesh => TopologySpec::Mesh { switches },
            TopologyKind::Ring => TopologySpec::Ring { switches },
            TopologyKind::Star => TopologySpec::Star { switches },
            TopologyKind::FatTree => TopologySpec::FatTree {
                switches: Some(switches),
                pods: None,
            },
        }
    }

    pub fn kind(&self) -> TopologyKind {
        match self {
            TopologySpec::Mesh { .. } => TopologyKind::Mesh,
            TopologySpec::Ring { .. } => TopologyKind::Ring,
            TopologySpec::Star { .. } => TopologyKind::Star,
            TopologySpec::FatTree { .. } => TopologyKind::FatTree,
        }
    }

    /// 请求的交换机数；fat-tree 只给出 `pods` 时按 pod 数换算
    pub fn switches(&self) -> Result<usize> {
        match *self {
            TopologySpec::Mesh { switches }
            | TopologySpec::Ring { switches }
            | TopologySpec::Star { switches } => Ok(switches),
            TopologySpec::FatTree { pods: Some(k), .. } => pods_to_switches(k),
            TopologySpec::FatTree {
                switches: Some(n),
                pods: None,
            } => Ok(n),
            TopologySpec::FatTree {
                switches: None,
                pods: None,
            } => Err(SimError::topology("fat_tree needs `switches` or `pods`")),
        }
    }

    pub fn build(&self) -> Result<Topology> {
        generate_topology(self.kind(), self.switches()?)
    }
}

impl ScenarioSpec {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 构建拓扑并运行一次链路故障场景；未给出 `seed` 时使用系统熵
    pub fn run(&self) -> Result<ScenarioResult> {
        let topology = self.topology.build()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        simulate_link_failure(&topology, &self.params, &mut rng)
    }
}
