//! 账本存储
//!
//! 用户、成就、授予三张表的组合，提供注册/发放写入口和过滤读取。
//! 引用完整性在发放时校验，下游的报告和统计不再重复检查。

use chrono::{DateTime, Utc};
use tracing::info;

use achieve_shared::error::{AchieveError, Result};

use crate::models::{Achievement, Award, User};
use crate::query::{AchievementFilter, AwardFilter, UserFilter};
use crate::store::Table;

/// 账本存储
///
/// 所有写入都是简单插入；读取返回克隆，聚合计算期间不持有锁。
/// 统计过程中落地的写入可能被部分观察到，这是接受的弱一致读。
#[derive(Debug, Default)]
pub struct LedgerStore {
    users: Table<User>,
    achievements: Table<Achievement>,
    awards: Table<Award>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 写入口 ====================

    /// 注册用户
    pub fn create_user(&self, name: impl Into<String>, lang: impl Into<String>) -> User {
        let name = name.into();
        let lang = lang.into();
        let user = self.users.insert_with(|id| User::new(id, name, lang));

        info!(user_id = user.id, name = %user.name, lang = %user.lang, "注册用户");
        user
    }

    /// 创建成就定义
    ///
    /// 分值必须大于 0，这是入库前唯一的业务校验；
    /// 校验失败时不产生任何记录。
    pub fn create_achievement(
        &self,
        name: impl Into<String>,
        points: i32,
        description: impl Into<String>,
    ) -> Result<Achievement> {
        if points <= 0 {
            return Err(AchieveError::Validation(format!(
                "成就分值必须大于 0，收到 {}",
                points
            )));
        }

        let name = name.into();
        let description = description.into();
        let achievement = self
            .achievements
            .insert_with(|id| Achievement::new(id, name, points, description));

        info!(
            achievement_id = achievement.id,
            name = %achievement.name,
            points = achievement.points,
            "创建成就"
        );
        Ok(achievement)
    }

    /// 向用户发放成就
    ///
    /// 两个引用都必须能解析到已存在的记录，时间戳缺省为当前时刻。
    /// 重复发放同一成就是合法的，每次生成独立记录。
    pub fn grant_award(
        &self,
        user_id: i64,
        achievement_id: i64,
        issued_at: Option<DateTime<Utc>>,
    ) -> Result<Award> {
        if !self.users.contains(user_id) {
            return Err(AchieveError::not_found("User", user_id));
        }
        if !self.achievements.contains(achievement_id) {
            return Err(AchieveError::not_found("Achievement", achievement_id));
        }

        let issued_at = issued_at.unwrap_or_else(Utc::now);
        let award = self
            .awards
            .insert_with(|id| Award::new(id, user_id, achievement_id, issued_at));

        info!(
            award_id = award.id,
            user_id,
            achievement_id,
            issued_at = %award.issued_at,
            "发放成就"
        );
        Ok(award)
    }

    // ==================== 读取口 ====================

    /// 按主键取用户
    pub fn get_user(&self, id: i64) -> Option<User> {
        self.users.get(id)
    }

    /// 按主键取成就
    pub fn get_achievement(&self, id: i64) -> Option<Achievement> {
        self.achievements.get(id)
    }

    /// 过滤查询用户，空过滤器返回全表（插入顺序）
    pub fn find_users(&self, filter: &UserFilter) -> Vec<User> {
        self.users.list_by(|u| filter.matches(u))
    }

    /// 过滤查询成就
    pub fn find_achievements(&self, filter: &AchievementFilter) -> Vec<Achievement> {
        self.achievements.list_by(|a| filter.matches(a))
    }

    /// 过滤查询授予记录
    pub fn find_awards(&self, filter: &AwardFilter) -> Vec<Award> {
        self.awards.list_by(|a| filter.matches(a))
    }

    /// 用户数
    pub fn user_count(&self) -> usize {
        self.users.count()
    }

    /// 授予记录数
    pub fn award_count(&self) -> usize {
        self.awards.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_assigns_sequential_ids() {
        let store = LedgerStore::new();
        let first = store.create_user("Иван", "ru");
        let second = store.create_user("John", "en");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.user_count(), 2);
    }

    #[test]
    fn test_create_achievement_rejects_non_positive_points() {
        let store = LedgerStore::new();

        let zero = store.create_achievement("Пустышка", 0, "нулевая ценность");
        assert!(matches!(zero, Err(AchieveError::Validation(_))));

        let negative = store.create_achievement("Антиприз", -5, "отрицательная ценность");
        assert!(matches!(negative, Err(AchieveError::Validation(_))));

        // 校验失败的成就不应出现在账本中
        assert!(store.find_achievements(&AchievementFilter::default()).is_empty());
    }

    #[test]
    fn test_grant_award_checks_references() {
        let store = LedgerStore::new();
        let user = store.create_user("Иван", "ru");
        let badge = store.create_achievement("Пользователь", 25, "описание").unwrap();

        let granted = store.grant_award(user.id, badge.id, None);
        assert!(granted.is_ok());

        let bad_user = store.grant_award(999, badge.id, None);
        assert!(matches!(bad_user, Err(AchieveError::NotFound { .. })));

        let bad_badge = store.grant_award(user.id, 999, None);
        assert!(matches!(bad_badge, Err(AchieveError::NotFound { .. })));

        assert_eq!(store.award_count(), 1);
    }

    #[test]
    fn test_grant_award_defaults_timestamp_to_now() {
        let store = LedgerStore::new();
        let user = store.create_user("Иван", "ru");
        let badge = store.create_achievement("Хакер", 80, "описание").unwrap();

        let before = Utc::now();
        let award = store.grant_award(user.id, badge.id, None).unwrap();
        let after = Utc::now();

        assert!(award.issued_at >= before && award.issued_at <= after);
    }

    #[test]
    fn test_duplicate_grants_create_distinct_records() {
        let store = LedgerStore::new();
        let user = store.create_user("Вася", "ru");
        let badge = store.create_achievement("Пользователь", 25, "описание").unwrap();

        let first = store.grant_award(user.id, badge.id, None).unwrap();
        let second = store.grant_award(user.id, badge.id, None).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.find_awards(&AwardFilter::by_user(user.id)).len(), 2);
    }

    #[test]
    fn test_find_users_filters_by_lang() {
        let store = LedgerStore::new();
        store.create_user("Иван", "ru");
        store.create_user("John", "en");
        store.create_user("Олег", "ru");

        let filter = UserFilter {
            lang: Some("ru".to_string()),
            ..Default::default()
        };
        let russians = store.find_users(&filter);
        assert_eq!(russians.len(), 2);
        assert!(russians.iter().all(|u| u.lang == "ru"));

        // 空过滤器按插入顺序返回全表
        let all = store.find_users(&UserFilter::default());
        let names: Vec<&str> = all.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Иван", "John", "Олег"]);
    }
}
