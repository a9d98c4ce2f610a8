//! 路由配置

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{achievements, awards, reports, stats, users};
use crate::state::AppState;

/// 构建 API 路由
///
/// 写入口为简单插入，读端点支持可选字段的精确匹配过滤。
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/{id}/report", get(reports::get_user_report))
        .route(
            "/achievements",
            post(achievements::create_achievement).get(achievements::list_achievements),
        )
        .route("/awards", post(awards::grant_award).get(awards::list_awards))
        .route("/stats", get(stats::get_statistics))
}
