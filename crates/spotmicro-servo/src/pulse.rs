//! 角度 → 舵机原生脉宽映射
//!
//! 线性映射 `0° → 554 µs`、`180° → 2400 µs`，结果截断为整数微秒。
//! 这两个端点是舵机型号常量。

use spotmicro_kinematics::Deg;

/// 0° 对应的脉宽（µs）
pub const MIN_PULSE_US: u16 = 554;

/// 180° 对应的脉宽（µs）
pub const MAX_PULSE_US: u16 = 2400;

/// 可寻址角度上限（度）
pub const MAX_ANGLE: Deg = Deg::DEG_180;

/// 角度到脉宽
///
/// 调用方保证 `angle` 在 `[0, 180]` 内；越界角度会得到越界脉宽（饱和到 `u16`）。
#[inline]
pub fn angle_to_pulse(angle: Deg) -> u16 {
    let span = f64::from(MAX_PULSE_US - MIN_PULSE_US);
    let pulse = angle.0 * span / MAX_ANGLE.0 + f64::from(MIN_PULSE_US);
    pulse as u16
}

/// 脉宽到角度
///
/// 截断后舵机实际收到的角度，写入日志时与请求角度对照。
#[inline]
pub fn pulse_to_angle(pulse_us: u16) -> Deg {
    let span = f64::from(MAX_PULSE_US - MIN_PULSE_US);
    Deg((f64::from(pulse_us) - f64::from(MIN_PULSE_US)) * MAX_ANGLE.0 / span)
}
