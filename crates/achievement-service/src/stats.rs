//! 排行榜统计引擎
//!
//! 对整个账本做一次只读扫描，产出四项相互独立的统计：
//! 获得成就最多的用户、总分最高的用户、任意两用户间分差的最大/最小值，
//! 以及存在大量"同日重复获得"记录的用户。
//!
//! 每次调用全量重算，不做增量或缓存；账本为空或用户不足时
//! 以空字段表达"无数据"，不报错。

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::models::Award;
use crate::query::{AwardFilter, UserFilter};
use crate::store::LedgerStore;

/// 同日成就对数的报告阈值
///
/// 统计 4 的字面语义：某用户同一自然日内发出的授予记录两两配对，
/// 对数达到该阈值即被报告。注意这并不是"连续 7 天活跃"。
pub const SAME_DAY_PAIR_THRESHOLD: usize = 7;

/// 获奖次数榜首
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardCountLeader {
    pub user_id: i64,
    pub award_count: usize,
}

/// 总分榜首
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLeader {
    pub user_id: i64,
    pub total_points: i64,
}

/// 一对用户及其分差
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreGap {
    pub user_ids: (i64, i64),
    pub gap: i64,
}

/// 全量统计报告
///
/// 数据不足的统计为 None / 空列表：
/// 账本无授予记录时榜首为 None，用户数少于 2 时分差为 None。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub most_awarded: Option<AwardCountLeader>,
    pub top_score: Option<ScoreLeader>,
    pub max_score_gap: Option<ScoreGap>,
    pub min_score_gap: Option<ScoreGap>,
    /// 同日成就对数达到阈值的用户，按 ID 升序
    pub same_day_repeat_users: Vec<i64>,
}

impl StatsReport {
    /// 空账本的"无数据"报告
    pub fn empty() -> Self {
        Self {
            most_awarded: None,
            top_score: None,
            max_score_gap: None,
            min_score_gap: None,
            same_day_repeat_users: Vec::new(),
        }
    }
}

/// 计算全量统计
///
/// 对账本做快照式读取（非原子：计算期间落地的写入可能被部分观察到），
/// 之后的聚合全部在本地数据上进行，不再持有任何锁。
pub fn compute_statistics(store: &LedgerStore) -> StatsReport {
    // 用户按 ID 升序扫描，决定统计 1-3 的平局裁决顺序
    let mut users = store.find_users(&UserFilter::default());
    users.sort_by_key(|u| u.id);

    let awards = store.find_awards(&AwardFilter::default());

    if users.is_empty() {
        debug!("账本中没有用户，返回空统计报告");
        return StatsReport::empty();
    }

    // 成就分值查找表
    let points_by_achievement: HashMap<i64, i32> = store
        .find_achievements(&Default::default())
        .into_iter()
        .map(|a| (a.id, a.points))
        .collect();

    // 每用户的获奖次数与总分（无授予记录的用户计为 0 分）
    let mut counts: HashMap<i64, usize> = HashMap::new();
    let mut totals: HashMap<i64, i64> = HashMap::new();
    for award in &awards {
        *counts.entry(award.user_id).or_insert(0) += 1;
        let points = points_by_achievement
            .get(&award.achievement_id)
            .copied()
            .unwrap_or(0);
        *totals.entry(award.user_id).or_insert(0) += i64::from(points);
    }

    // ==================== 统计 1：获奖次数最多 ====================
    // 严格大于才更新，ID 升序扫描使平局时最小 ID 获胜
    let mut most_awarded: Option<AwardCountLeader> = None;
    if !awards.is_empty() {
        for user in &users {
            let count = counts.get(&user.id).copied().unwrap_or(0);
            if count == 0 {
                continue;
            }
            let better = most_awarded
                .as_ref()
                .is_none_or(|best| count > best.award_count);
            if better {
                most_awarded = Some(AwardCountLeader {
                    user_id: user.id,
                    award_count: count,
                });
            }
        }
    }

    // ==================== 统计 2：总分最高 ====================
    let mut top_score: Option<ScoreLeader> = None;
    if !awards.is_empty() {
        for user in &users {
            let total = totals.get(&user.id).copied().unwrap_or(0);
            let better = top_score
                .as_ref()
                .is_none_or(|best| total > best.total_points);
            if better {
                top_score = Some(ScoreLeader {
                    user_id: user.id,
                    total_points: total,
                });
            }
        }
    }

    // ==================== 统计 3：最大/最小分差 ====================
    // 有序对 (i, j) 按 ID 升序双重扫描，幅值重复计算但极值不受影响；
    // 平局时取扫描顺序中首个命中的对
    let mut max_score_gap: Option<ScoreGap> = None;
    let mut min_score_gap: Option<ScoreGap> = None;
    for a in &users {
        for b in &users {
            if a.id == b.id {
                continue;
            }
            let total_a = totals.get(&a.id).copied().unwrap_or(0);
            let total_b = totals.get(&b.id).copied().unwrap_or(0);
            let gap = (total_a - total_b).abs();

            if max_score_gap.as_ref().is_none_or(|g| gap > g.gap) {
                max_score_gap = Some(ScoreGap {
                    user_ids: (a.id, b.id),
                    gap,
                });
            }
            if min_score_gap.as_ref().is_none_or(|g| gap < g.gap) {
                min_score_gap = Some(ScoreGap {
                    user_ids: (a.id, b.id),
                    gap,
                });
            }
        }
    }

    // ==================== 统计 4：同日重复获奖 ====================
    let mut same_day_repeat_users = Vec::new();
    for user in &users {
        let pairs = same_day_pair_count(&awards, user.id);
        if pairs >= SAME_DAY_PAIR_THRESHOLD {
            same_day_repeat_users.push(user.id);
        }
    }

    StatsReport {
        most_awarded,
        top_score,
        max_score_gap,
        min_score_gap,
        same_day_repeat_users,
    }
}

/// 某用户授予记录中发放于同一自然日（UTC）的无序对数
///
/// 对该用户的记录数是平方复杂度，账本规模小是设计前提。
fn same_day_pair_count(awards: &[Award], user_id: i64) -> usize {
    let days: Vec<_> = awards
        .iter()
        .filter(|a| a.user_id == user_id)
        .map(|a| a.issued_at.date_naive())
        .collect();

    let mut pairs = 0;
    for i in 0..days.len() {
        for j in (i + 1)..days.len() {
            if days[i] == days[j] {
                pairs += 1;
            }
        }
    }
    pairs
}
