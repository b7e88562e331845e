// ==========================================
// 集成测试辅助模块
// ==========================================

#![allow(dead_code)]

pub mod page_fixture;
pub mod simulator_fixture;
