// ==========================================
// 传感器告警模拟 - 告警条目
// ==========================================
// 条目由告警列表独占, 组件不删除/不去重
// ==========================================

use crate::domain::types::Severity;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// AlertEntry - 告警条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntry {
    pub entry_id: Uuid,             // 条目ID (渲染为 data-entry-id)
    pub severity: Severity,         // 告警级别
    pub title: String,              // 标题
    pub message: String,            // 消息
    pub time_label: String,         // 时间标签 ("Justo ahora")
    pub created_at: NaiveDateTime,  // 创建时间 (仅用于日志)
}

impl AlertEntry {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            severity,
            title: title.into(),
            message: message.into(),
            time_label: time_label.into(),
            created_at: chrono::Local::now().naive_local(),
        }
    }

    /// 条目元素的 class 属性
    pub fn class_name(&self) -> String {
        format!("alert-item {}", self.severity.as_class())
    }

    /// 条目元素的内部 HTML
    pub fn inner_html(&self) -> String {
        format!(
            concat!(
                "<div class=\"alert-icon\" aria-hidden=\"true\">{}</div>",
                "<div class=\"alert-content\">",
                "<div class=\"alert-title\">{}</div>",
                "<div class=\"alert-message\">{}</div>",
                "<div class=\"alert-time\">{}</div>",
                "</div>"
            ),
            self.severity.icon(),
            escape_html(&self.title),
            escape_html(&self.message),
            escape_html(&self.time_label),
        )
    }
}

/// HTML 文本转义
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_html_layout() {
        let entry = AlertEntry::new(
            Severity::Warning,
            "Temperatura Alta",
            "Temperatura actual: 35°C (Límite: 30°C)",
            "Justo ahora",
        );
        assert_eq!(entry.class_name(), "alert-item warning");

        let html = entry.inner_html();
        assert!(html.starts_with("<div class=\"alert-icon\" aria-hidden=\"true\">⚠️</div>"));
        assert!(html.contains("<div class=\"alert-title\">Temperatura Alta</div>"));
        assert!(html.contains("35°C (Límite: 30°C)"));
        assert!(html.contains("<div class=\"alert-time\">Justo ahora</div>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape_html("pH · 7.0"), "pH · 7.0");
    }
}
