//! 强类型角度单位
//!
//! 使用 NewType 模式区分弧度与角度。IK 内部全部以弧度计算，
//! 对外输出、舵机换算全部使用角度。
//!
//! # 示例
//!
//! ```rust
//! use spotmicro_kinematics::{Deg, Rad};
//!
//! let angle = Rad(std::f64::consts::FRAC_PI_2).to_deg();
//! assert!((angle.0 - 90.0).abs() < 1e-9);
//!
//! // 类型安全：以下代码无法编译
//! // let _ = Rad(1.0) + Deg(1.0);
//! ```

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// 弧度（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rad(pub f64);

impl Rad {
    /// 零弧度常量
    pub const ZERO: Self = Rad(0.0);

    /// 创建新的弧度值
    #[inline]
    pub const fn new(value: f64) -> Self {
        Rad(value)
    }

    /// 转换为角度
    ///
    /// 使用 `x * 180 / π` 的计算顺序，与参考实现逐位一致。
    #[inline]
    pub fn to_deg(self) -> Deg {
        Deg((self.0 * 180.0) / std::f64::consts::PI)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl fmt::Display for Rad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

impl Add for Rad {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rad(self.0 + rhs.0)
    }
}

/// 角度（NewType）
///
/// 逻辑关节角与舵机物理角都用它表示。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deg(pub f64);

impl Deg {
    /// 零角度常量
    pub const ZERO: Self = Deg(0.0);

    /// 90 度（舵机中位）
    pub const DEG_90: Self = Deg(90.0);

    /// 180 度
    pub const DEG_180: Self = Deg(180.0);

    /// 创建新的角度值
    #[inline]
    pub const fn new(value: f64) -> Self {
        Deg(value)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// 是否为有限值（非 NaN、非无穷）
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// 是否落在闭区间 `[min, max]` 内（NaN 永远返回 false）
    #[inline]
    pub fn within(self, min: Self, max: Self) -> bool {
        self.0 >= min.0 && self.0 <= max.0
    }
}

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

impl Add for Deg {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Deg(self.0 + rhs.0)
    }
}

impl Sub for Deg {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Deg(self.0 - rhs.0)
    }
}

impl Neg for Deg {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Deg(-self.0)
    }
}
