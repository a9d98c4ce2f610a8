//! 成就 API 处理器
//!
//! 成就定义的创建与过滤查询。分值必须为正，这是唯一的入库校验。

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::models::Achievement;
use crate::query::AchievementFilter;
use crate::state::AppState;

/// 创建成就请求
#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    pub name: String,
    pub points: i32,
    /// 源语言描述文本
    pub description: String,
}

/// 成就列表响应
#[derive(Debug, Serialize)]
pub struct AchievementListResponse {
    pub achievements: Vec<Achievement>,
    pub total: usize,
}

/// 创建成就
///
/// POST /achievements
/// 分值不为正时返回 422，账本保持不变。
pub async fn create_achievement(
    State(state): State<AppState>,
    Json(req): Json<CreateAchievementRequest>,
) -> ApiResult<(StatusCode, Json<Achievement>)> {
    let achievement = state
        .store
        .create_achievement(req.name, req.points, req.description)?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// 过滤查询成就
///
/// GET /achievements?id=&name=&points=
pub async fn list_achievements(
    State(state): State<AppState>,
    Query(filter): Query<AchievementFilter>,
) -> Json<AchievementListResponse> {
    let achievements = state.store.find_achievements(&filter);
    let total = achievements.len();

    tracing::info!(total, ?filter, "查询成就");

    Json(AchievementListResponse {
        achievements,
        total,
    })
}
