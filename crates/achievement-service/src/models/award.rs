//! 授予记录
//!
//! 一条授予把一个成就绑定到一个用户，并带发放时间戳。
//! 同一用户可以多次获得同一成就，每次都是独立记录；记录不可更新或删除。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// 成就授予记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: i64,
    pub user_id: i64,
    pub achievement_id: i64,
    /// 发放时间，默认为创建时刻
    pub issued_at: DateTime<Utc>,
}

impl Award {
    pub fn new(id: i64, user_id: i64, achievement_id: i64, issued_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            achievement_id,
            issued_at,
        }
    }
}

impl Record for Award {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_new() {
        let now = Utc::now();
        let award = Award::new(1, 10, 3, now);
        assert_eq!(award.user_id, 10);
        assert_eq!(award.achievement_id, 3);
        assert_eq!(award.issued_at, now);
    }

    #[test]
    fn test_duplicate_awards_are_distinct_records() {
        let now = Utc::now();
        let first = Award::new(1, 10, 3, now);
        let second = Award::new(2, 10, 3, now);
        // 同一用户、同一成就的重复授予通过 ID 区分
        assert_ne!(first.id, second.id);
        assert_eq!(first.user_id, second.user_id);
        assert_eq!(first.achievement_id, second.achievement_id);
    }
}
