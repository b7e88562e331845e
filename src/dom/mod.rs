// ==========================================
// 传感器告警模拟 - DOM 层
// ==========================================
// 职责: 宿主文档模型、选择器、查找策略、页面布局、事件
// ==========================================

pub mod document;
pub mod error;
pub mod layout;
pub mod lookup;
pub mod page;
pub mod selector;

// 重导出
pub use document::{Document, Element, NodeId};
pub use error::{DomError, DomResult, SelectorError};
pub use layout::{LayoutNode, PageLayout};
pub use lookup::{resolve_first, LookupStrategy, ResolvedElement};
pub use page::{DomEvent, Page};
pub use selector::Selector;
