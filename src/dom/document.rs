// ==========================================
// 传感器告警模拟 - 文档模型
// ==========================================
// 职责: 内存元素树 (arena), 供组件查询与修改
// 约定:
// - 根节点为 <html>, 其下固定一个 <body>
// - create_element 创建的节点在挂载前处于游离状态, 不参与查询
// - 所有修改操作计入 perf 统计
// ==========================================

use crate::dom::error::{DomError, DomResult};
use crate::dom::selector::{CompoundSelector, Selector};
use crate::domain::escape_html;
use crate::perf;
use std::collections::BTreeMap;
use std::fmt;

/// 元素句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 无闭合标签的元素
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

// ==========================================
// Element - 单个元素
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: String,
    disabled: bool,
    text: String,
    inner_html: Option<String>,
    style: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// 读取属性（id/class/value/disabled 映射到对应字段）
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" => {
                if self.classes.is_empty() {
                    None
                } else {
                    Some(self.classes.join(" "))
                }
            }
            "value" => Some(self.value.clone()),
            "disabled" => self.disabled.then(String::new),
            "style" => self.style.clone(),
            _ => self.attributes.get(name).cloned(),
        }
    }

    fn matches_compound(&self, compound: &CompoundSelector) -> bool {
        if let Some(tag) = &compound.tag {
            if &self.tag != tag {
                return false;
            }
        }
        if let Some(id) = &compound.id {
            if self.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !compound.classes.iter().all(|c| self.has_class(c)) {
            return false;
        }
        compound.attributes.iter().all(|m| match (self.attribute(&m.name), &m.value) {
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => &actual == expected,
            (None, _) => false,
        })
    }
}

// ==========================================
// Document - 元素树
// ==========================================
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// 创建只含 <html><body></body></html> 的空文档
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![Element::new("html"), Element::new("body")],
            root: NodeId(0),
            body: NodeId(1),
        };
        doc.nodes[0].children.push(NodeId(1));
        doc.nodes[1].parent = Some(NodeId(0));
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn element(&self, node: NodeId) -> DomResult<&Element> {
        self.nodes.get(node.0).ok_or(DomError::UnknownNode(node.0))
    }

    fn element_mut(&mut self, node: NodeId) -> DomResult<&mut Element> {
        self.nodes.get_mut(node.0).ok_or(DomError::UnknownNode(node.0))
    }

    /// 修改元素并计入 perf 统计
    fn mutate<R>(&mut self, node: NodeId, f: impl FnOnce(&mut Element) -> R) -> DomResult<R> {
        let element = self.element_mut(node)?;
        let out = f(element);
        perf::record_dom_mutation();
        Ok(out)
    }

    // ==========================================
    // 树结构
    // ==========================================

    /// 创建游离元素
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// 追加为最后一个子节点
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_child(parent, child, false)
    }

    /// 插入为第一个子节点
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_child(parent, child, true)
    }

    fn insert_child(&mut self, parent: NodeId, child: NodeId, front: bool) -> DomResult<()> {
        self.element(parent)?;
        self.element(child)?;
        if child == self.root || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest {
                parent: parent.0,
                child: child.0,
            });
        }

        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        let children = &mut self.nodes[parent.0].children;
        if front {
            children.insert(0, child);
        } else {
            children.push(child);
        }
        perf::record_dom_mutation();
        Ok(())
    }

    /// 从父节点移除（节点本身保留, 可再次挂载）
    pub fn remove(&mut self, node: NodeId) -> DomResult<()> {
        self.element(node)?;
        if node == self.root || node == self.body {
            return Err(DomError::HierarchyRequest {
                parent: node.0,
                child: node.0,
            });
        }
        if self.detach(node) {
            perf::record_dom_mutation();
        }
        Ok(())
    }

    fn detach(&mut self, node: NodeId) -> bool {
        match self.nodes[node.0].parent.take() {
            Some(parent) => {
                self.nodes[parent.0].children.retain(|c| *c != node);
                true
            }
            None => false,
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }

    /// 节点是否挂载在文档树上
    pub fn is_connected(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len() && self.is_inclusive_ancestor(self.root, node)
    }

    pub fn children(&self, node: NodeId) -> DomResult<&[NodeId]> {
        Ok(self.element(node)?.children())
    }

    pub fn parent(&self, node: NodeId) -> DomResult<Option<NodeId>> {
        Ok(self.element(node)?.parent())
    }

    /// 文档顺序（先序）遍历 scope 的所有后代, 不含 scope 本身
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.nodes[n.0].id.as_deref() == Some(id))
    }

    /// 第一个匹配的元素（文档顺序）
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.matches(*n, selector))
    }

    /// 所有匹配的元素（文档顺序）
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    /// 元素是否匹配选择器组中的任意一项
    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        if node.0 >= self.nodes.len() {
            return false;
        }
        selector.groups().iter().any(|complex| {
            let (target, ancestors) = match complex.compounds.split_last() {
                Some(split) => split,
                None => return false,
            };
            if !self.nodes[node.0].matches_compound(target) {
                return false;
            }
            // 仅有后代组合符, 自右向左贪心匹配祖先即可
            let mut current = self.nodes[node.0].parent;
            for compound in ancestors.iter().rev() {
                loop {
                    match current {
                        Some(n) if self.nodes[n.0].matches_compound(compound) => {
                            current = self.nodes[n.0].parent;
                            break;
                        }
                        Some(n) => current = self.nodes[n.0].parent,
                        None => return false,
                    }
                }
            }
            true
        })
    }

    // ==========================================
    // 属性与状态
    // ==========================================

    /// 设置属性（id/class/value/disabled/style 映射到对应字段）
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        let name = name.to_ascii_lowercase();
        self.mutate(node, |el| match name.as_str() {
            "id" => el.id = Some(value.to_string()),
            "class" => el.classes = value.split_whitespace().map(str::to_string).collect(),
            "value" => el.value = value.to_string(),
            "disabled" => el.disabled = true,
            "style" => el.style = Some(value.to_string()),
            _ => {
                el.attributes.insert(name.clone(), value.to_string());
            }
        })
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element(node)?.attribute(&name.to_ascii_lowercase()))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        self.mutate(node, |el| {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        })
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> DomResult<()> {
        self.mutate(node, |el| el.classes.retain(|c| c != class))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element(node)?.has_class(class))
    }

    pub fn value(&self, node: NodeId) -> DomResult<&str> {
        Ok(&self.element(node)?.value)
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) -> DomResult<()> {
        self.mutate(node, |el| el.value = value.to_string())
    }

    pub fn is_disabled(&self, node: NodeId) -> DomResult<bool> {
        Ok(self.element(node)?.disabled)
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) -> DomResult<()> {
        self.mutate(node, |el| el.disabled = disabled)
    }

    /// 设置纯文本内容（清空子节点与 inner_html）
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        let children = self.element(node)?.children.clone();
        for child in children {
            self.nodes[child.0].parent = None;
        }
        self.mutate(node, |el| {
            el.children.clear();
            el.inner_html = None;
            el.text = text.to_string();
        })
    }

    pub fn text_content(&self, node: NodeId) -> DomResult<String> {
        let el = self.element(node)?;
        let mut out = el.text.clone();
        for child in &el.children {
            out.push_str(&self.text_content(*child)?);
        }
        Ok(out)
    }

    /// 设置原始 HTML 片段（序列化时原样输出, 不解析为子节点）
    pub fn set_inner_html(&mut self, node: NodeId, html: &str) -> DomResult<()> {
        self.mutate(node, |el| el.inner_html = Some(html.to_string()))
    }

    pub fn inner_html(&self, node: NodeId) -> DomResult<String> {
        let el = self.element(node)?;
        let mut out = String::new();
        if !el.text.is_empty() {
            out.push_str(&escape_html(&el.text));
        }
        if let Some(html) = &el.inner_html {
            out.push_str(html);
        }
        for child in &el.children {
            out.push_str(&self.outer_html(*child)?);
        }
        Ok(out)
    }

    pub fn set_style(&mut self, node: NodeId, css: &str) -> DomResult<()> {
        self.mutate(node, |el| el.style = Some(css.to_string()))
    }

    pub fn style(&self, node: NodeId) -> DomResult<Option<&str>> {
        Ok(self.element(node)?.style.as_deref())
    }

    // ==========================================
    // 序列化
    // ==========================================

    pub fn outer_html(&self, node: NodeId) -> DomResult<String> {
        let el = self.element(node)?;
        let mut out = format!("<{}", el.tag);
        if let Some(id) = &el.id {
            out.push_str(&format!(" id=\"{}\"", escape_html(id)));
        }
        if !el.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_html(&el.classes.join(" "))));
        }
        for (name, value) in &el.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        if let Some(style) = &el.style {
            out.push_str(&format!(" style=\"{}\"", escape_html(style)));
        }
        if !el.value.is_empty() {
            out.push_str(&format!(" value=\"{}\"", escape_html(&el.value)));
        }
        if el.disabled {
            out.push_str(" disabled");
        }
        out.push('>');

        if VOID_TAGS.contains(&el.tag.as_str()) {
            return Ok(out);
        }
        out.push_str(&self.inner_html(node)?);
        out.push_str(&format!("</{}>", el.tag));
        Ok(out)
    }
}
