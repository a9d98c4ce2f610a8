//! 排行榜统计 API 处理器

use axum::{Json, extract::State};

use crate::state::AppState;
use crate::stats::{StatsReport, compute_statistics};

/// 获取全量统计报告
///
/// GET /stats
/// 每次请求全量重算；空账本返回各字段为空的报告而非错误。
pub async fn get_statistics(State(state): State<AppState>) -> Json<StatsReport> {
    tracing::info!(
        users = state.store.user_count(),
        awards = state.store.award_count(),
        "计算排行榜统计"
    );

    Json(compute_statistics(state.store.as_ref()))
}
