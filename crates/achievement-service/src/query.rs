//! 过滤查询
//!
//! 每类记录一个过滤器，所有字段均为可选的精确匹配条件：
//! 给定的字段取逻辑与，缺省字段匹配全部记录，空过滤器返回全表。
//! 过滤器实现 Deserialize，HTTP 查询串可直接绑定。

use serde::Deserialize;

use crate::models::{Achievement, Award, User};

/// 用户过滤器
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub lang: Option<String>,
}

impl UserFilter {
    /// 记录是否满足所有给定条件
    pub fn matches(&self, user: &User) -> bool {
        self.id.is_none_or(|id| user.id == id)
            && self.name.as_ref().is_none_or(|name| &user.name == name)
            && self.lang.as_ref().is_none_or(|lang| &user.lang == lang)
    }
}

/// 成就过滤器
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AchievementFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub points: Option<i32>,
}

impl AchievementFilter {
    pub fn matches(&self, achievement: &Achievement) -> bool {
        self.id.is_none_or(|id| achievement.id == id)
            && self
                .name
                .as_ref()
                .is_none_or(|name| &achievement.name == name)
            && self.points.is_none_or(|points| achievement.points == points)
    }
}

/// 授予记录过滤器
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwardFilter {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub achievement_id: Option<i64>,
}

impl AwardFilter {
    pub fn matches(&self, award: &Award) -> bool {
        self.id.is_none_or(|id| award.id == id)
            && self.user_id.is_none_or(|user_id| award.user_id == user_id)
            && self
                .achievement_id
                .is_none_or(|achievement_id| award.achievement_id == achievement_id)
    }

    /// 只按用户筛选的便捷构造
    pub fn by_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }
}
