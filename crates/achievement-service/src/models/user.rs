//! 用户记录
//!
//! 用户在注册时创建，之后不可变。语言代码决定成就报告是否需要翻译。

use serde::{Deserialize, Serialize};

use super::Record;

/// 用户
///
/// `lang` 为用户偏好语言的短代码（如 "ru"、"en"）。
/// 显示名为自由文本，不要求唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub lang: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lang: lang.into(),
        }
    }
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}
