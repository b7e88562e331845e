// ==========================================
// 传感器告警模拟 - 领域模型层
// ==========================================
// 职责: 阈值配置、读数、告警条目、基础类型
// 红线: 不含 DOM 操作, 不含随机数生成
// ==========================================

pub mod alert;
pub mod reading;
pub mod threshold;
pub mod types;

// 重导出核心类型
pub use alert::{escape_html, AlertEntry};
pub use reading::{round_one_decimal, SensorReading};
pub use threshold::{parse_float_prefix, InvalidThreshold, ThresholdConfig};
pub use types::{Lifecycle, Severity, ThresholdField};
