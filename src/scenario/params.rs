//! 模型参数
//!
//! 由调用方显式传入，引擎不读取任何全局状态。

use serde::{Deserialize, Serialize};

use crate::dist::Pareto;
use crate::error::{Result, SimError};
use crate::replication::DelayModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    pub num_controllers: usize,
    pub iterations: usize,
    /// 读延迟
    pub ralpha: f64,
    pub rxmin: f64,
    /// 写延迟
    pub walpha: f64,
    pub wxmin: f64,
    /// 控制器-交换机网络延迟
    pub psalpha: f64,
    pub psxmin: f64,
    /// 控制器-控制器网络延迟
    pub pcalpha: f64,
    pub pcxmin: f64,
    /// 入口交换机推迟到原子提交点再更新
    pub consistent_updates: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            num_controllers: 3,
            iterations: 1000,
            ralpha: 3.8,
            rxmin: 1.55,
            walpha: 3.35,
            wxmin: 1.68,
            psalpha: 2.5,
            psxmin: 0.5,
            pcalpha: 2.5,
            pcxmin: 0.5,
            consistent_updates: false,
        }
    }
}

/// 构造 Pareto 分布，错误中的参数名换成配置字段名
fn pareto(
    alpha_name: &'static str,
    alpha: f64,
    xmin_name: &'static str,
    xmin: f64,
) -> Result<Pareto> {
    Pareto::new(alpha, xmin).map_err(|e| match e {
        SimError::InvalidParameter {
            name,
            value,
            reason,
        } => {
            let field = if name == "alpha" { alpha_name } else { xmin_name };
            SimError::param(field, value, reason)
        }
        other => other,
    })
}

impl SimParams {
    pub fn validate(&self) -> Result<()> {
        self.delay_model().map(|_| ())
    }

    /// 校验全部参数并构造延迟模型
    pub fn delay_model(&self) -> Result<DelayModel> {
        if self.iterations == 0 {
            return Err(SimError::param(
                "iterations",
                self.iterations as f64,
                "iteration count must be positive",
            ));
        }
        Ok(DelayModel {
            read: pareto("ralpha", self.ralpha, "rxmin", self.rxmin)?,
            write: pareto("walpha", self.walpha, "wxmin", self.wxmin)?,
            switch_net: pareto("psalpha", self.psalpha, "psxmin", self.psxmin)?,
            controller_net: pareto("pcalpha", self.pcalpha, "pcxmin", self.pcxmin)?,
        })
    }
}
