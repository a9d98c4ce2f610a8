//! 授予 API 处理器
//!
//! 成就发放与授予记录的过滤查询。
//! 发放校验引用完整性；重复发放是合法的业务场景。

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::models::Award;
use crate::query::AwardFilter;
use crate::state::AppState;

/// 发放成就请求
#[derive(Debug, Deserialize)]
pub struct GrantAwardRequest {
    pub user_id: i64,
    pub achievement_id: i64,
    /// 发放时间，缺省为当前时刻
    pub issued_at: Option<DateTime<Utc>>,
}

/// 授予记录列表响应
#[derive(Debug, Serialize)]
pub struct AwardListResponse {
    pub awards: Vec<Award>,
    pub total: usize,
}

/// 发放成就
///
/// POST /awards
/// 用户或成就不存在时返回 404。
pub async fn grant_award(
    State(state): State<AppState>,
    Json(req): Json<GrantAwardRequest>,
) -> ApiResult<(StatusCode, Json<Award>)> {
    let award = state
        .store
        .grant_award(req.user_id, req.achievement_id, req.issued_at)?;
    Ok((StatusCode::CREATED, Json(award)))
}

/// 过滤查询授予记录
///
/// GET /awards?id=&user_id=&achievement_id=
pub async fn list_awards(
    State(state): State<AppState>,
    Query(filter): Query<AwardFilter>,
) -> Json<AwardListResponse> {
    let awards = state.store.find_awards(&filter);
    let total = awards.len();

    tracing::info!(total, ?filter, "查询授予记录");

    Json(AwardListResponse { awards, total })
}
