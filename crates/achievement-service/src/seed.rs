//! 演示数据填充
//!
//! 标准演示数据集：10 个用户（俄语/英语各半）和 6 个固定分值的成就，
//! 外加可配置数量的随机发放。集成测试与本地演示共用该数据集。

use rand::Rng;
use tracing::info;

use achieve_shared::error::Result;

use crate::store::LedgerStore;

/// 演示用户：姓名 + 偏好语言
const DEMO_USERS: [(&str, &str); 10] = [
    ("Иван", "ru"),
    ("Вася", "ru"),
    ("Олег", "ru"),
    ("Игорь", "ru"),
    ("Дмитрий", "ru"),
    ("John", "en"),
    ("Elvis", "en"),
    ("Eric", "en"),
    ("Bob", "en"),
    ("Lui", "en"),
];

/// 演示成就：名称、分值、源语言描述
const DEMO_ACHIEVEMENTS: [(&str, i32, &str); 6] = [
    (
        "Начинающий пользователь",
        10,
        "Выдается начинающему пользователю, который только начинает знакомиться с компьютерной системой.",
    ),
    (
        "Пользователь",
        25,
        "Выдается пользователю, имеющему некоторый пользовательский опыт.",
    ),
    (
        "Уверенный пользователь",
        40,
        "Выдается уверенному пользователю, имеющему хороший опыт и знания для работы в компьютерных системах.",
    ),
    (
        "Хацкерок",
        65,
        "Начинающий хакер, владеющий теоретической базой и небольшим опытом обхода компьютерных систем.",
    ),
    (
        "Хакер",
        80,
        "Хакер, владеющий достаточным опытом и знаниями, чтобы обойти систему средней сложности.",
    ),
    (
        "Кибер-Бог",
        100,
        "Хакер, владеющий достаточным опытом и знаниями, чтобы обойти компьютерную систему любой сложности.",
    ),
];

/// 填充配置
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// 随机发放的授予记录数
    pub award_count: usize,
}

impl Default for SeedConfig {
    /// 默认配置：10 条随机发放
    fn default() -> Self {
        Self { award_count: 10 }
    }
}

/// 填充结果统计
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub users: usize,
    pub achievements: usize,
    pub awards: usize,
}

/// 将演示数据填充到账本
///
/// 用户与成就为固定数据，授予记录在两者之间均匀随机分配。
pub fn populate(store: &LedgerStore, config: &SeedConfig) -> Result<SeedSummary> {
    let users: Vec<i64> = DEMO_USERS
        .iter()
        .map(|(name, lang)| store.create_user(*name, *lang).id)
        .collect();

    let achievements: Vec<i64> = DEMO_ACHIEVEMENTS
        .iter()
        .map(|(name, points, text)| {
            store
                .create_achievement(*name, *points, *text)
                .map(|a| a.id)
        })
        .collect::<Result<_>>()?;

    let mut rng = rand::rng();
    for _ in 0..config.award_count {
        let user_id = users[rng.random_range(0..users.len())];
        let achievement_id = achievements[rng.random_range(0..achievements.len())];
        store.grant_award(user_id, achievement_id, None)?;
    }

    let summary = SeedSummary {
        users: users.len(),
        achievements: achievements.len(),
        awards: config.award_count,
    };
    info!(
        users = summary.users,
        achievements = summary.achievements,
        awards = summary.awards,
        "演示数据填充完成"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{AchievementFilter, UserFilter};

    #[test]
    fn test_populate_creates_fixture() {
        let store = LedgerStore::new();
        let summary = populate(&store, &SeedConfig::default()).unwrap();

        assert_eq!(summary.users, 10);
        assert_eq!(summary.achievements, 6);
        assert_eq!(store.award_count(), 10);
    }

    #[test]
    fn test_fixture_language_split() {
        let store = LedgerStore::new();
        populate(&store, &SeedConfig { award_count: 0 }).unwrap();

        let ru = store.find_users(&UserFilter {
            lang: Some("ru".to_string()),
            ..Default::default()
        });
        let en = store.find_users(&UserFilter {
            lang: Some("en".to_string()),
            ..Default::default()
        });
        assert_eq!(ru.len(), 5);
        assert_eq!(en.len(), 5);
    }

    #[test]
    fn test_fixture_point_values() {
        let store = LedgerStore::new();
        populate(&store, &SeedConfig { award_count: 0 }).unwrap();

        let mut points: Vec<i32> = store
            .find_achievements(&AchievementFilter::default())
            .iter()
            .map(|a| a.points)
            .collect();
        points.sort_unstable();
        assert_eq!(points, vec![10, 25, 40, 65, 80, 100]);
    }

    #[test]
    fn test_awards_reference_existing_records() {
        let store = LedgerStore::new();
        populate(&store, &SeedConfig { award_count: 25 }).unwrap();

        for award in store.find_awards(&Default::default()) {
            assert!(store.get_user(award.user_id).is_some());
            assert!(store.get_achievement(award.achievement_id).is_some());
        }
    }
}
