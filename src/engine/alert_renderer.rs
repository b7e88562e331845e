// ==========================================
// 传感器告警模拟 - 告警渲染
// ==========================================
// 职责:
// - 告警条目 -> div.alert-item, 插入列表最前
// - 初始化失败横幅 (阻塞: 红色 / 非阻塞: 琥珀色)
// 红线: 已有条目不重排; 仅在配置了上限时裁剪最旧条目
// ==========================================

use crate::dom::{Document, DomResult, NodeId};
use crate::domain::AlertEntry;

/// 阻塞式错误横幅样式
pub const BLOCKING_BANNER_STYLE: &str =
    "background:#ef4444;color:#fff;padding:10px;border-radius:8px;margin-bottom:10px;font-weight:600";

/// 非阻塞警告横幅样式
pub const WARNING_BANNER_STYLE: &str =
    "background:#f59e0b;color:#111;padding:10px;border-radius:8px;margin-bottom:10px;font-weight:600";

/// 横幅类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Blocking,
    Warning,
}

impl BannerKind {
    pub fn style(&self) -> &'static str {
        match self {
            BannerKind::Blocking => BLOCKING_BANNER_STYLE,
            BannerKind::Warning => WARNING_BANNER_STYLE,
        }
    }

    fn class_name(&self) -> &'static str {
        match self {
            BannerKind::Blocking => "alert-sim-banner blocking",
            BannerKind::Warning => "alert-sim-banner warning",
        }
    }
}

/// 在 target 最前插入横幅
pub fn render_banner(doc: &mut Document, target: NodeId, kind: BannerKind, message: &str) -> DomResult<NodeId> {
    let notice = doc.create_element("div");
    doc.set_attribute(notice, "class", kind.class_name())?;
    doc.set_attribute(notice, "role", "alert")?;
    doc.set_style(notice, kind.style())?;
    doc.set_text_content(notice, message)?;
    doc.prepend(target, notice)?;
    Ok(notice)
}

// ==========================================
// AlertListRenderer - 告警列表渲染器
// ==========================================
pub struct AlertListRenderer {
    list: NodeId,
    max_entries: Option<usize>,
}

impl AlertListRenderer {
    /// # 参数
    /// - list: 列表容器
    /// - max_entries: 列表条目上限 (None 表示不限)
    pub fn new(list: NodeId, max_entries: Option<usize>) -> Self {
        Self { list, max_entries }
    }

    /// 渲染单个条目并插入列表最前
    pub fn prepend(&self, doc: &mut Document, entry: &AlertEntry) -> DomResult<NodeId> {
        let item = doc.create_element("div");
        doc.set_attribute(item, "class", &entry.class_name())?;
        doc.set_attribute(item, "data-entry-id", &entry.entry_id.to_string())?;
        doc.set_inner_html(item, &entry.inner_html())?;
        doc.prepend(self.list, item)?;
        self.enforce_cap(doc)?;
        Ok(item)
    }

    /// 按发出顺序依次插入（最后发出的位于最上方）
    pub fn prepend_all(&self, doc: &mut Document, entries: &[AlertEntry]) -> DomResult<Vec<NodeId>> {
        entries.iter().map(|e| self.prepend(doc, e)).collect()
    }

    fn enforce_cap(&self, doc: &mut Document) -> DomResult<()> {
        let Some(max) = self.max_entries else {
            return Ok(());
        };
        let overflow: Vec<NodeId> = doc.children(self.list)?.iter().skip(max).copied().collect();
        for node in &overflow {
            doc.remove(*node)?;
        }
        if !overflow.is_empty() {
            tracing::debug!(removed = overflow.len(), max, "alert list trimmed");
        }
        Ok(())
    }
}
