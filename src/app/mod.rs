// ==========================================
// 传感器告警模拟 - 应用层
// ==========================================
// 职责: 告警模拟组件, 连接页面事件与引擎
// ==========================================

pub mod error;
pub mod simulator;

// 重导出
pub use error::{SimulatorError, SimulatorResult};
pub use simulator::{AlertSimulator, Bindings, EvaluationOutcome};
