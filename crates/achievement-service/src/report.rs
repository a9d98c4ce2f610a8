//! 个人成就报告
//!
//! 把用户的授予记录与成就定义连接成一份按时间排序的报告。
//! 用户偏好语言与源语言不同时，名称与描述逐条经翻译适配器转换；
//! 翻译失败不中断报告，降级为源语言原文。

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use achieve_shared::error::{AchieveError, Result};

use crate::models::{Achievement, Award};
use crate::query::AwardFilter;
use crate::store::LedgerStore;
use crate::translate::Translator;

/// 报告条目
///
/// 每条授予记录一个条目，文案已本地化为用户语言。
#[derive(Debug, Clone, Serialize)]
pub struct UserAchievement {
    pub award_id: i64,
    pub name: String,
    pub points: i32,
    pub description: String,
    pub issued_at: DateTime<Utc>,
}

/// 生成用户的成就报告
///
/// 用户不存在时返回 NotFound。条目按 (issued_at, award_id) 升序排列。
/// 连接在翻译开始前已物化完成，适配器调用期间不持有存储锁。
pub async fn user_report(
    store: &LedgerStore,
    translator: &dyn Translator,
    canonical_lang: &str,
    user_id: i64,
) -> Result<Vec<UserAchievement>> {
    let user = store
        .get_user(user_id)
        .ok_or_else(|| AchieveError::not_found("User", user_id))?;

    // 物化连接：授予记录 + 成就定义
    let mut joined: Vec<(Award, Achievement)> = store
        .find_awards(&AwardFilter::by_user(user_id))
        .into_iter()
        .filter_map(|award| {
            let achievement = store.get_achievement(award.achievement_id);
            if achievement.is_none() {
                warn!(
                    award_id = award.id,
                    achievement_id = award.achievement_id,
                    "授予记录引用的成就缺失，条目被跳过"
                );
            }
            achievement.map(|a| (award, a))
        })
        .collect();

    joined.sort_by_key(|(award, _)| (award.issued_at, award.id));

    let needs_translation = user.lang != canonical_lang;
    let mut entries = Vec::with_capacity(joined.len());

    for (award, achievement) in joined {
        let (name, description) = if needs_translation {
            let name = translate_or_fallback(
                translator,
                &achievement.name,
                canonical_lang,
                &user.lang,
                award.id,
            )
            .await;
            let description = translate_or_fallback(
                translator,
                &achievement.description,
                canonical_lang,
                &user.lang,
                award.id,
            )
            .await;
            (name, description)
        } else {
            (achievement.name, achievement.description)
        };

        entries.push(UserAchievement {
            award_id: award.id,
            name,
            points: achievement.points,
            description,
            issued_at: award.issued_at,
        });
    }

    Ok(entries)
}

/// 翻译单段文案，失败时降级为原文
async fn translate_or_fallback(
    translator: &dyn Translator,
    text: &str,
    from: &str,
    to: &str,
    award_id: i64,
) -> String {
    match translator.translate(text, from, to).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(award_id, from, to, error = %e, "翻译失败，降级为源语言原文");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::IdentityTranslator;
    use crate::translate::testing::{DictionaryTranslator, FailingTranslator};
    use chrono::TimeZone;

    const CANONICAL: &str = "ru";

    fn store_with_user(lang: &str) -> (LedgerStore, i64) {
        let store = LedgerStore::new();
        let user = store.create_user("Тестовый", lang);
        (store, user.id)
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let store = LedgerStore::new();
        let result = user_report(&store, &IdentityTranslator, CANONICAL, 42).await;
        assert!(matches!(result, Err(AchieveError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_user_without_awards_gets_empty_report() {
        let (store, user_id) = store_with_user("ru");
        let report = user_report(&store, &IdentityTranslator, CANONICAL, user_id)
            .await
            .unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_canonical_lang_user_gets_raw_text() {
        let (store, user_id) = store_with_user("ru");
        let badge = store
            .create_achievement("Пользователь", 25, "Выдается пользователю")
            .unwrap();
        store.grant_award(user_id, badge.id, None).unwrap();

        // 字典翻译器不应被触发：ru 用户读源语言原文
        let translator = DictionaryTranslator::new().with_entry("Пользователь", "User");
        let report = user_report(&store, &translator, CANONICAL, user_id)
            .await
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].name, "Пользователь");
        assert_eq!(report[0].points, 25);
    }

    #[tokio::test]
    async fn test_non_canonical_user_gets_translated_text() {
        let (store, user_id) = store_with_user("en");
        let badge = store
            .create_achievement("Пользователь", 25, "Выдается пользователю")
            .unwrap();
        store.grant_award(user_id, badge.id, None).unwrap();

        let translator = DictionaryTranslator::new()
            .with_entry("Пользователь", "User")
            .with_entry("Выдается пользователю", "Granted to a user");
        let report = user_report(&store, &translator, CANONICAL, user_id)
            .await
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].name, "User");
        assert_eq!(report[0].description, "Granted to a user");
    }

    #[tokio::test]
    async fn test_translation_failure_falls_back_to_canonical_text() {
        let (store, user_id) = store_with_user("en");
        let badge = store
            .create_achievement("Хакер", 80, "Хакер с опытом")
            .unwrap();
        store.grant_award(user_id, badge.id, None).unwrap();

        let report = user_report(&store, &FailingTranslator, CANONICAL, user_id)
            .await
            .unwrap();

        // 适配器故障不中断报告，条目降级为原文
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].name, "Хакер");
        assert_eq!(report[0].description, "Хакер с опытом");
    }

    #[tokio::test]
    async fn test_entries_sorted_by_issued_at_then_award_id() {
        let (store, user_id) = store_with_user("ru");
        let badge = store.create_achievement("Пользователь", 25, "описание").unwrap();

        let day1 = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();

        // 乱序发放：后发的时间戳更早
        let late = store.grant_award(user_id, badge.id, Some(day2)).unwrap();
        let early = store.grant_award(user_id, badge.id, Some(day1)).unwrap();
        let same_moment = store.grant_award(user_id, badge.id, Some(day1)).unwrap();

        let report = user_report(&store, &IdentityTranslator, CANONICAL, user_id)
            .await
            .unwrap();

        let order: Vec<i64> = report.iter().map(|e| e.award_id).collect();
        // 同一时刻按 award_id 升序
        assert_eq!(order, vec![early.id, same_moment.id, late.id]);
    }
}
