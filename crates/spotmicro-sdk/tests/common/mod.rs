//! 集成测试公共辅助

#![allow(dead_code)]

use spotmicro_sdk::prelude::*;

/// 使用记录型执行器创建一条腿
pub fn recording_leg(id: LegId, config: &RobotConfig) -> Leg<RecordingActuator> {
    Leg::new(id, config.leg(id), |_, _| RecordingActuator::new())
        .expect("leg should initialize with a valid config")
}

/// 每个舵机写入过的脉宽（shoulder, arm, wrist）
pub fn pulses(leg: &Leg<RecordingActuator>) -> [Vec<u16>; 3] {
    leg.limbs().map(|limb| limb.actuator().pulses().to_vec())
}

/// 可行域内的足端高度（mm）
pub const FEASIBLE_Z: std::ops::Range<f64> = 60.0..200.0;

/// 可行域内的侧向偏移（mm）
pub const FEASIBLE_Y: std::ops::Range<f64> = -20.0..20.0;
