// ==========================================
// 传感器告警模拟 - 元素查找策略
// ==========================================
// 按顺序尝试一组选择器, 取第一个命中的结果,
// 并记录命中的策略名称用于诊断
// ==========================================

use crate::dom::document::{Document, NodeId};
use crate::dom::error::SelectorError;
use crate::dom::selector::Selector;
use serde::{Deserialize, Serialize};

/// 单个查找策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupStrategy {
    pub name: String,     // 策略名称 (诊断用)
    pub selector: String, // CSS 选择器
}

impl LookupStrategy {
    pub fn new(name: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: selector.into(),
        }
    }

    pub fn compile(&self) -> Result<Selector, SelectorError> {
        Selector::parse(&self.selector)
    }
}

/// 查找结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedElement {
    pub node: NodeId,
    pub strategy: String, // 命中的策略名称
    pub index: usize,     // 命中的策略序号 (从 0 开始)
}

/// 依次尝试策略, 返回第一个命中的元素
///
/// # 返回
/// - Ok(Some): 命中
/// - Ok(None): 全部未命中
/// - Err: 某个选择器无法解析（解析错误不会被后续策略吞掉）
pub fn resolve_first(
    doc: &Document,
    strategies: &[LookupStrategy],
) -> Result<Option<ResolvedElement>, SelectorError> {
    for (index, strategy) in strategies.iter().enumerate() {
        let selector = strategy.compile()?;
        if let Some(node) = doc.query_selector(&selector) {
            return Ok(Some(ResolvedElement {
                node,
                strategy: strategy.name.clone(),
                index,
            }));
        }
        tracing::debug!(strategy = %strategy.name, selector = %strategy.selector, "lookup strategy missed");
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategies() -> Vec<LookupStrategy> {
        vec![
            LookupStrategy::new("config-button", ".alert-config button"),
            LookupStrategy::new("config-primary", ".alert-config .btn-primary"),
            LookupStrategy::new("any-button", "button[type=\"button\"], button"),
        ]
    }

    #[test]
    fn test_first_strategy_wins() {
        let mut doc = Document::new();
        let config = doc.create_element("div");
        doc.set_attribute(config, "class", "alert-config").unwrap();
        doc.append_child(doc.body(), config).unwrap();
        let button = doc.create_element("button");
        doc.append_child(config, button).unwrap();

        let resolved = resolve_first(&doc, &strategies()).unwrap().unwrap();
        assert_eq!(resolved.node, button);
        assert_eq!(resolved.strategy, "config-button");
        assert_eq!(resolved.index, 0);
    }

    #[test]
    fn test_falls_back_to_later_strategy() {
        let mut doc = Document::new();
        let button = doc.create_element("button");
        doc.append_child(doc.body(), button).unwrap();

        let resolved = resolve_first(&doc, &strategies()).unwrap().unwrap();
        assert_eq!(resolved.node, button);
        assert_eq!(resolved.strategy, "any-button");
        assert_eq!(resolved.index, 2);
    }

    #[test]
    fn test_no_match_and_invalid_selector() {
        let doc = Document::new();
        assert_eq!(resolve_first(&doc, &strategies()).unwrap(), None);

        let broken = vec![LookupStrategy::new("broken", "button >")];
        assert!(resolve_first(&doc, &broken).is_err());
    }
}
