// ==========================================
// 传感器告警模拟 - 配置层
// ==========================================
// 职责: 组件配置 (选择器、语言、种子、列表上限)
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod error;
pub mod simulator_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, get_default_config_path, ConfigManager, ConfigSource};
pub use error::{ConfigError, ConfigResult};
pub use simulator_config::{default_trigger_strategies, InputIds, SimulatorConfig};
