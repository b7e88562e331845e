// ==========================================
// 页面布局构建器 - 用于集成测试
// ==========================================
// 在标准页面基础上裁剪出各种宿主缺陷
// ==========================================

use sensor_alert_sim::dom::{LayoutNode, PageLayout};

fn threshold_input(id: &str) -> LayoutNode {
    LayoutNode::new("input")
        .with_id(id)
        .with_attr("type", "number")
        .with_attr("step", "0.1")
}

fn trigger_button() -> LayoutNode {
    LayoutNode::new("button")
        .with_class("btn btn-primary")
        .with_attr("type", "button")
        .with_text("Simular Alerta")
}

pub struct PageBuilder {
    inputs: Vec<&'static str>,
    config_button: Option<LayoutNode>,
    stray_button: bool,
    display: bool,
    list: bool,
}

impl PageBuilder {
    /// 标准页面
    pub fn standard() -> Self {
        Self {
            inputs: vec!["tempMax", "humidityMin", "phMin"],
            config_button: Some(trigger_button()),
            stray_button: false,
            display: true,
            list: true,
        }
    }

    pub fn without_input(mut self, id: &str) -> Self {
        self.inputs.retain(|i| *i != id);
        self
    }

    pub fn without_button(mut self) -> Self {
        self.config_button = None;
        self
    }

    /// 配置区按钮不带 btn-primary 之外的任何线索 (仍位于配置区)
    pub fn with_plain_config_button(mut self) -> Self {
        self.config_button = Some(LayoutNode::new("a").with_class("btn-primary"));
        self
    }

    /// 配置区外放一个按钮, 只能被最后一级策略命中
    pub fn with_stray_button(mut self) -> Self {
        self.stray_button = true;
        self
    }

    pub fn without_list(mut self) -> Self {
        self.list = false;
        self
    }

    pub fn without_display(mut self) -> Self {
        self.display = false;
        self.list = false;
        self
    }

    pub fn build(self) -> PageLayout {
        let mut config: Vec<LayoutNode> = self.inputs.iter().map(|id| threshold_input(id)).collect();
        if let Some(button) = self.config_button {
            config.push(button);
        }

        let mut body = vec![LayoutNode::new("section")
            .with_class("alert-config")
            .with_children(config)];
        if self.stray_button {
            body.push(LayoutNode::new("footer").with_children(vec![trigger_button()]));
        }
        if self.display {
            let children = if self.list {
                vec![LayoutNode::new("div").with_class("alert-list")]
            } else {
                Vec::new()
            };
            body.push(
                LayoutNode::new("section")
                    .with_class("alert-display")
                    .with_children(children),
            );
        }
        PageLayout { body }
    }
}
