//! 运行时控制台变量
//!
//! 通过 `Arc<AudioCvars>` 在初始化时绑定到需要它的内部实体。
//! 读取不做同步（单线程配置语义），使用 relaxed 原子操作。

use super::AtlConfig;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct AudioCvars {
    ignore_window_focus: AtomicBool,
}

impl AudioCvars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AtlConfig) -> Self {
        Self {
            ignore_window_focus: AtomicBool::new(config.ignore_window_focus),
        }
    }

    /// 是否忽略窗口焦点变化
    pub fn ignore_window_focus(&self) -> bool {
        self.ignore_window_focus.load(Ordering::Relaxed)
    }

    pub fn set_ignore_window_focus(&self, ignore: bool) {
        let previous = self.ignore_window_focus.swap(ignore, Ordering::Relaxed);
        if previous != ignore {
            tracing::info!(target: "atl", ignore_window_focus = ignore, "cvar changed");
        }
    }
}
