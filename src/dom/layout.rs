// ==========================================
// 传感器告警模拟 - 页面布局 (JSON)
// ==========================================
// 用途: 从 JSON 描述构建宿主文档, 供 CLI 与测试使用
// 格式:
// { "body": [ { "tag": "div", "class": "alert-config", "children": [...] } ] }
// ==========================================

use crate::dom::document::{Document, NodeId};
use crate::dom::error::DomResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单个元素描述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<LayoutNode>) -> Self {
        self.children = children;
        self
    }
}

/// 页面描述（body 的子元素列表）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub body: Vec<LayoutNode>,
}

impl PageLayout {
    /// 从 JSON 文本解析
    pub fn from_json(raw: &str) -> DomResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 标准告警配置页面:
    /// .alert-config (三个阈值输入 + "Simular Alerta" 按钮) 与 .alert-display > .alert-list
    pub fn standard() -> Self {
        let threshold_input = |id: &str| {
            LayoutNode::new("input")
                .with_id(id)
                .with_attr("type", "number")
                .with_attr("step", "0.1")
        };

        Self {
            body: vec![
                LayoutNode::new("section").with_class("alert-config").with_children(vec![
                    threshold_input("tempMax"),
                    threshold_input("humidityMin"),
                    threshold_input("phMin"),
                    LayoutNode::new("button")
                        .with_class("btn btn-primary")
                        .with_attr("type", "button")
                        .with_text("Simular Alerta"),
                ]),
                LayoutNode::new("section").with_class("alert-display").with_children(vec![
                    LayoutNode::new("div").with_class("alert-list"),
                ]),
            ],
        }
    }

    /// 构建文档
    pub fn build(&self) -> DomResult<Document> {
        let mut doc = Document::new();
        let body = doc.body();
        for node in &self.body {
            build_node(&mut doc, body, node)?;
        }
        Ok(doc)
    }
}

fn build_node(doc: &mut Document, parent: NodeId, layout: &LayoutNode) -> DomResult<NodeId> {
    let node = doc.create_element(&layout.tag);
    if let Some(id) = &layout.id {
        doc.set_attribute(node, "id", id)?;
    }
    if let Some(class) = &layout.class {
        doc.set_attribute(node, "class", class)?;
    }
    for (name, value) in &layout.attrs {
        doc.set_attribute(node, name, value)?;
    }
    if let Some(value) = &layout.value {
        doc.set_value(node, value)?;
    }
    if let Some(text) = &layout.text {
        doc.set_text_content(node, text)?;
    }
    doc.append_child(parent, node)?;
    for child in &layout.children {
        build_node(doc, node, child)?;
    }
    Ok(node)
}
