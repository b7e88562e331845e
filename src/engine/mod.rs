// ==========================================
// 传感器告警模拟 - 引擎层
// ==========================================
// 职责: 读数生成、告警规则评估、告警渲染
// 红线: 规则引擎不触碰文档, 渲染器不做规则判断
// ==========================================

pub mod alert_renderer;
pub mod alert_rules;
pub mod reading_source;

// 重导出核心引擎
pub use alert_renderer::{render_banner, AlertListRenderer, BannerKind};
pub use alert_rules::{detect_breaches, AlertRuleEngine, Breach};
pub use reading_source::{RandomReadingSource, ReadingSource, SequenceReadingSource};
