// ==========================================
// 传感器告警模拟 - 领域类型定义
// ==========================================
// 告警级别 / 组件生命周期 / 阈值字段
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 告警级别 (Severity)
// ==========================================
// info: 无越限; warning: 温度越限; critical: 湿度或 pH 越限
// 序列化格式: 小写 (与 CSS class 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,     // 一切正常
    Warning,  // 警告
    Critical, // 严重
}

impl Severity {
    /// CSS class 名（`alert-item <class>`）
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// 告警图标
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨",
            Severity::Warning => "⚠️",
            Severity::Info => "📧",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_class())
    }
}

// ==========================================
// 阈值字段 (Threshold Field)
// ==========================================
// 三个输入框一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdField {
    TempMax,     // 最高温度
    HumidityMin, // 最低湿度
    PhMin,       // 最低 pH
}

impl ThresholdField {
    pub const ALL: [ThresholdField; 3] = [
        ThresholdField::TempMax,
        ThresholdField::HumidityMin,
        ThresholdField::PhMin,
    ];

    /// 默认元素 id
    pub fn default_element_id(&self) -> &'static str {
        match self {
            ThresholdField::TempMax => "tempMax",
            ThresholdField::HumidityMin => "humidityMin",
            ThresholdField::PhMin => "phMin",
        }
    }
}

impl fmt::Display for ThresholdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_element_id())
    }
}

// ==========================================
// 生命周期状态 (Lifecycle)
// ==========================================
// Uninitialized -> Ready | Failed
// Failed 为终态; 每次评估都是 Ready -> Ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lifecycle {
    Uninitialized,
    Ready,
    Failed,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Uninitialized => write!(f, "UNINITIALIZED"),
            Lifecycle::Ready => write!(f, "READY"),
            Lifecycle::Failed => write!(f, "FAILED"),
        }
    }
}
