//! REST API 处理器
//!
//! 每类资源一个模块，DTO 与 handler 放在一起。

pub mod achievements;
pub mod awards;
pub mod reports;
pub mod stats;
pub mod users;
