//! 错误类型
//!
//! 拓扑/参数校验在构造时立即失败；仿真循环内部不再产生错误。

use thiserror::Error;

/// 引擎统一错误类型
#[derive(Debug, Error)]
pub enum SimError {
    /// fat-tree 交换机数或 pod 数不合法
    #[error("invalid topology: {reason}")]
    InvalidTopology { reason: String },

    /// Pareto 形状/尺度参数非正、迭代次数为 0 等
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// 请求链路故障时拓扑中没有任何链路
    #[error("topology has no links to fail")]
    EmptyTopology,

    #[error("scenario file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario spec: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    pub(crate) fn topology(reason: impl Into<String>) -> Self {
        SimError::InvalidTopology {
            reason: reason.into(),
        }
    }

    pub(crate) fn param(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
