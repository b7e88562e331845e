// ==========================================
// 传感器告警模拟 - 页面宿主
// ==========================================
// 职责: 文档 + 阻塞式用户提示 (dialog) + 事件派发
// 说明: 事件以值的形式返回给调用方, 由组件的 handle_event 消费
// ==========================================

use crate::dom::document::{Document, NodeId};
use crate::dom::error::DomResult;

/// 页面事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// 输入框内容变更
    Input(NodeId),
    /// 按钮点击
    Click(NodeId),
}

impl DomEvent {
    pub fn target(&self) -> NodeId {
        match self {
            DomEvent::Input(n) | DomEvent::Click(n) => *n,
        }
    }
}

// ==========================================
// Page - 宿主页面
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct Page {
    document: Document,
    dialogs: Vec<String>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            dialogs: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// 弹出阻塞式提示
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "dialog shown");
        self.dialogs.push(message);
    }

    /// 已弹出的提示（按时间顺序）
    pub fn dialogs(&self) -> &[String] {
        &self.dialogs
    }

    /// 取走已弹出的提示
    pub fn take_dialogs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.dialogs)
    }

    /// 模拟用户输入: 写入值并产生 Input 事件
    pub fn input(&mut self, node: NodeId, value: &str) -> DomResult<DomEvent> {
        self.document.set_value(node, value)?;
        Ok(DomEvent::Input(node))
    }

    /// 模拟点击: 被禁用的元素不产生事件
    pub fn click(&self, node: NodeId) -> DomResult<Option<DomEvent>> {
        if self.document.is_disabled(node)? {
            tracing::debug!(node = %node, "click ignored on disabled element");
            return Ok(None);
        }
        Ok(Some(DomEvent::Click(node)))
    }
}
