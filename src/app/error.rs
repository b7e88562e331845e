// ==========================================
// 传感器告警模拟 - 组件错误类型
// ==========================================
// 错误分类:
// - MissingInputs: 致命, 缺少阈值输入框, 组件不工作
// - MissingTrigger: 降级, 找不到触发按钮, 组件不工作
// - 阈值无效不在此列: 以 EvaluationOutcome::Rejected 返回, 组件仍可用
// - Dom / Selector: 意外故障, 在事件边界记录并吞掉
// 列表容器缺失不是错误: 自动创建并记录 warn
// ==========================================

use crate::dom::{DomError, SelectorError};
use crate::domain::Lifecycle;
use thiserror::Error;

/// 组件错误类型
#[derive(Error, Debug)]
pub enum SimulatorError {
    // ===== 初始化错误 =====
    #[error("缺少阈值输入框: {}", .missing.join(", "))]
    MissingInputs { missing: Vec<String> },

    #[error("未找到触发按钮, 已尝试: {}", .tried.join(" | "))]
    MissingTrigger { tried: Vec<String> },

    #[error("组件状态不允许该操作: {0}")]
    NotReady(Lifecycle),

    // ===== 意外故障 =====
    #[error("文档操作失败: {0}")]
    Dom(#[from] DomError),

    #[error("选择器无效: {0}")]
    Selector(#[from] SelectorError),
}

impl SimulatorError {
    /// 是否为初始化阶段的预期失败（已向页面渲染横幅）
    pub fn is_init_failure(&self) -> bool {
        matches!(
            self,
            SimulatorError::MissingInputs { .. } | SimulatorError::MissingTrigger { .. }
        )
    }
}

/// Result 类型别名
pub type SimulatorResult<T> = Result<T, SimulatorError>;
