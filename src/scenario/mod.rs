//! 场景编排模块
//!
//! 把拓扑、参数与五种方案串起来：一次调用完成一次链路故障评估。

mod orchestrator;
mod params;
mod spec;

pub use orchestrator::{
    ParameterSummary, ScenarioResult, SchemeSummary, parameter_summaries, pick_failed_link,
    remove_link, simulate_failure_of, simulate_link_failure,
};
pub use params::SimParams;
pub use spec::{ScenarioSpec, TopologySpec};
