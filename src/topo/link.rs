//! 标识符与链路类型
//!
//! 交换机只由编号表示，存在性由拓扑规模隐含。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 交换机标识符，取值范围 `[0, num_switches)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitchId(pub usize);

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// 单向链路 `(src, dest)`，按结构判等
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedLink {
    pub src: SwitchId,
    pub dest: SwitchId,
}

impl DirectedLink {
    pub fn new(src: usize, dest: usize) -> Self {
        Self {
            src: SwitchId(src),
            dest: SwitchId(dest),
        }
    }

    /// 反向链路
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dest,
            dest: self.src,
        }
    }

    /// 两条链路是否连接同一对交换机（忽略方向）
    pub fn same_endpoints(&self, other: &DirectedLink) -> bool {
        self == other || *self == other.reversed()
    }
}

impl fmt::Display for DirectedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}->{})", self.src.0, self.dest.0)
    }
}
