// ==========================================
// 传感器告警模拟 - 核心库
// ==========================================
// 组件: 阈值配置 (tempMax / humidityMin / phMin) + 模拟按钮 + 告警列表
// 流程: 输入 -> 按钮可用性; 点击 -> 随机读数 -> 规则评估 -> 条目前插
// 宿主: 内存文档模型 (dom), 不依赖浏览器
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 阈值、读数、告警条目
pub mod domain;

// 文档层 - 宿主页面模型
pub mod dom;

// 引擎层 - 读数来源、规则、渲染
pub mod engine;

// 配置层 - 组件配置
pub mod config;

// 日志系统
pub mod logging;

// 性能追踪
pub mod perf;

// 国际化
pub mod i18n;

// 应用层 - 告警模拟组件
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AlertEntry, InvalidThreshold, Lifecycle, SensorReading, Severity, ThresholdConfig,
    ThresholdField,
};

// 文档模型
pub use dom::{Document, DomEvent, NodeId, Page, PageLayout};

// 引擎
pub use engine::{AlertRuleEngine, RandomReadingSource, ReadingSource, SequenceReadingSource};

// 配置
pub use config::{ConfigManager, SimulatorConfig};

// 组件
pub use app::{AlertSimulator, EvaluationOutcome, SimulatorError};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "传感器告警模拟";
