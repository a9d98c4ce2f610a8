//! 用户 API 处理器
//!
//! 用户注册与过滤查询。用户一经注册不可变更。

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::query::UserFilter;
use crate::state::AppState;

/// 注册用户请求
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    /// 偏好语言代码，如 "ru"、"en"
    pub lang: String,
}

/// 用户列表响应
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

/// 注册用户
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> (StatusCode, Json<User>) {
    let user = state.store.create_user(req.name, req.lang);
    (StatusCode::CREATED, Json(user))
}

/// 过滤查询用户
///
/// GET /users?id=&name=&lang=
/// 所有查询参数可选，给定的参数精确匹配并取逻辑与。
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<UserListResponse> {
    let users = state.store.find_users(&filter);
    let total = users.len();

    tracing::info!(total, ?filter, "查询用户");

    Json(UserListResponse { users, total })
}
