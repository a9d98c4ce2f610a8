//! 成就定义
//!
//! 成就是带分值的徽章。名称与描述以源语言撰写并存储，
//! 非源语言用户的报告在读取时按需翻译。

use serde::{Deserialize, Serialize};

use super::Record;

/// 成就定义
///
/// `points` 为该成就的分值，创建时要求大于 0（账本的唯一入库校验）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    pub points: i32,
    /// 成就描述，源语言文本
    pub description: String,
}

impl Achievement {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        points: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            points,
            description: description.into(),
        }
    }
}

impl Record for Achievement {
    fn id(&self) -> i64 {
        self.id
    }
}
