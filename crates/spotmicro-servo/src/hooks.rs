//! 钩子系统（Hook System）
//!
//! 在舵机归中、下发命令后触发外部回调，替代构造函数里的调试打印。
//!
//! # 设计原则
//!
//! - **非阻塞**: 回调运行在控制循环里，禁止 I/O 与长时间加锁，推荐用 Channel 转发
//! - **可选**: 未注册回调时没有任何额外开销
//!
//! # 使用示例
//!
//! ```rust
//! use spotmicro_servo::hooks::{HookManager, LimbCallback, LimbEvent};
//! use std::sync::Arc;
//!
//! struct Printer;
//!
//! impl LimbCallback for Printer {
//!     fn on_command(&self, event: &LimbEvent) {
//!         let _ = event.pulse_us;
//!     }
//! }
//!
//! let mut hooks = HookManager::new();
//! hooks.add_callback(Arc::new(Printer));
//! assert_eq!(hooks.len(), 1);
//! ```

use crate::role::JointRole;
use spotmicro_kinematics::Deg;
use std::sync::Arc;

/// 一次舵机命令的快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbEvent {
    /// 关节角色
    pub role: JointRole,
    /// 通道号
    pub channel: u8,
    /// 物理角度
    pub angle: Deg,
    /// 实际写入的脉宽（µs）
    pub pulse_us: u16,
}

/// 舵机回调 Trait
pub trait LimbCallback: Send + Sync {
    /// 每次成功写入脉宽后调用
    fn on_command(&self, event: &LimbEvent);

    /// 舵机绑定并归中后调用（可选）
    ///
    /// 默认转发给 `on_command`。
    fn on_homed(&self, event: &LimbEvent) {
        self.on_command(event);
    }
}

/// 钩子管理器
///
/// 回调列表本身不是线程安全的，归属单个 `Limb`。
#[derive(Default, Clone)]
pub struct HookManager {
    callbacks: Vec<Arc<dyn LimbCallback>>,
}

impl HookManager {
    /// 创建新的钩子管理器
    #[must_use]
    pub const fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// 添加回调
    pub fn add_callback(&mut self, callback: Arc<dyn LimbCallback>) {
        self.callbacks.push(callback);
    }

    /// 移除所有回调
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// 触发所有命令回调
    pub fn trigger_command(&self, event: &LimbEvent) {
        for callback in self.callbacks.iter() {
            callback.on_command(event);
        }
    }

    /// 触发所有归中回调
    pub fn trigger_homed(&self, event: &LimbEvent) {
        for callback in self.callbacks.iter() {
            callback.on_homed(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for HookManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookManager")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{Sender, bounded};
    use std::sync::atomic::{AtomicU64, Ordering};

    struct TestCallback {
        tx: Sender<LimbEvent>,
        homed: Arc<AtomicU64>,
    }

    impl LimbCallback for TestCallback {
        fn on_command(&self, event: &LimbEvent) {
            let _ = self.tx.try_send(*event);
        }

        fn on_homed(&self, event: &LimbEvent) {
            self.homed.fetch_add(1, Ordering::Relaxed);
            let _ = self.tx.try_send(*event);
        }
    }

    fn event() -> LimbEvent {
        LimbEvent {
            role: JointRole::Arm,
            channel: 4,
            angle: Deg(90.0),
            pulse_us: 1477,
        }
    }

    #[test]
    fn test_hook_manager_add_and_clear() {
        let mut hooks = HookManager::new();
        assert!(hooks.is_empty());

        let (tx, _rx) = bounded(10);
        hooks.add_callback(Arc::new(TestCallback {
            tx,
            homed: Arc::new(AtomicU64::new(0)),
        }));
        assert_eq!(hooks.len(), 1);

        hooks.clear();
        assert!(hooks.is_empty());
    }

    #[test]
    fn test_hook_manager_trigger() {
        let mut hooks = HookManager::new();
        let (tx, rx) = bounded::<LimbEvent>(10);
        let homed = Arc::new(AtomicU64::new(0));
        hooks.add_callback(Arc::new(TestCallback {
            tx,
            homed: homed.clone(),
        }));

        hooks.trigger_homed(&event());
        hooks.trigger_command(&event());

        assert_eq!(homed.load(Ordering::Relaxed), 1);
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_default_on_homed_forwards() {
        struct CommandOnly(Sender<LimbEvent>);

        impl LimbCallback for CommandOnly {
            fn on_command(&self, event: &LimbEvent) {
                let _ = self.0.try_send(*event);
            }
        }

        let (tx, rx) = bounded(1);
        let mut hooks = HookManager::new();
        hooks.add_callback(Arc::new(CommandOnly(tx)));
        hooks.trigger_homed(&event());

        assert_eq!(rx.try_recv().unwrap(), event());
    }
}
