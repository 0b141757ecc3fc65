//! Pareto / 指数分布的闭式公式

use serde::Serialize;

use crate::error::{Result, SimError};

/// Pareto 分布参数（形状 `alpha`，最小值 `xmin`），构造时校验均为正
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pareto {
    alpha: f64,
    xmin: f64,
}

impl Pareto {
    pub fn new(alpha: f64, xmin: f64) -> Result<Self> {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(SimError::param("alpha", alpha, "pareto shape must be positive"));
        }
        if !(xmin.is_finite() && xmin > 0.0) {
            return Err(SimError::param("xmin", xmin, "pareto scale must be positive"));
        }
        Ok(Self { alpha, xmin })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// 逆 CDF 采样：`(alpha * xmin^alpha / (1 - u))^(1 / (alpha + 1))`，`u ∈ [0, 1)`
    pub fn inverse(&self, u: f64) -> f64 {
        (self.alpha * self.xmin.powf(self.alpha) / (1.0 - u)).powf(1.0 / (self.alpha + 1.0))
    }

    pub fn pdf(&self, t: f64) -> f64 {
        pareto_pdf(self.alpha, self.xmin, t)
    }

    pub fn cdf(&self, t: f64) -> f64 {
        pareto_cdf(self.alpha, self.xmin, t)
    }

    pub fn expected(&self) -> f64 {
        pareto_expected(self.alpha, self.xmin)
    }
}

pub fn pareto_pdf(alpha: f64, xmin: f64, t: f64) -> f64 {
    if t < xmin {
        return 0.0;
    }
    alpha * xmin.powf(alpha) / t.powf(alpha + 1.0)
}

pub fn pareto_cdf(alpha: f64, xmin: f64, t: f64) -> f64 {
    if t < xmin {
        return 0.0;
    }
    1.0 - (xmin / t).powf(alpha)
}

/// `alpha <= 1` 时期望发散
pub fn pareto_expected(alpha: f64, xmin: f64) -> f64 {
    if alpha <= 1.0 {
        return f64::INFINITY;
    }
    alpha * xmin / (alpha - 1.0)
}

pub fn exponential_pdf(lambda: f64, t: f64) -> f64 {
    lambda * (-lambda * t).exp()
}

pub fn exponential_cdf(lambda: f64, t: f64) -> f64 {
    1.0 - (-lambda * t).exp()
}

pub fn exponential_expected(lambda: f64) -> f64 {
    1.0 / lambda
}
