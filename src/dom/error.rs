// ==========================================
// 传感器告警模拟 - DOM 层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 选择器解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("选择器为空")]
    Empty,

    #[error("选择器意外结束: {0:?}")]
    UnexpectedEnd(String),

    #[error("选择器非法字符 (pos={pos}, ch={ch:?}): {source_text:?}")]
    UnexpectedChar {
        pos: usize,
        ch: char,
        source_text: String,
    },

    #[error("选择器字符串未闭合: {0:?}")]
    UnterminatedString(String),
}

/// 文档操作错误
#[derive(Error, Debug)]
pub enum DomError {
    #[error("节点不存在: node={0}")]
    UnknownNode(usize),

    #[error("非法的层级操作: parent={parent} child={child}")]
    HierarchyRequest { parent: usize, child: usize },

    #[error("页面布局解析失败: {0}")]
    LayoutParse(#[from] serde_json::Error),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// Result 类型别名
pub type DomResult<T> = Result<T, DomError>;
