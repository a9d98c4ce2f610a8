//! 个人成就报告 API 处理器

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::ApiResult;
use crate::report::{self, UserAchievement};
use crate::state::AppState;

/// 个人成就报告响应
#[derive(Debug, Serialize)]
pub struct UserReportResponse {
    pub user_id: i64,
    pub achievements: Vec<UserAchievement>,
    pub total: usize,
}

/// 获取用户的本地化成就报告
///
/// GET /users/{id}/report
/// 用户不存在时返回 404；翻译失败的条目降级为源语言原文。
pub async fn get_user_report(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserReportResponse>> {
    tracing::info!(user_id, "生成个人成就报告");

    let achievements = report::user_report(
        state.store.as_ref(),
        state.translator.as_ref(),
        &state.canonical_lang,
        user_id,
    )
    .await?;

    let total = achievements.len();
    Ok(Json(UserReportResponse {
        user_id,
        achievements,
        total,
    }))
}
