//! 成就账本服务入口
//!
//! 启动 REST 服务：加载配置、初始化日志、可选填充演示数据、
//! 注册路由并监听关闭信号优雅退出。

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use achieve_shared::{config::AppConfig, observability};
use achievement_service::{
    routes,
    seed::{self, SeedConfig},
    state::AppState,
    store::LedgerStore,
    translate,
};

/// 命令行参数
///
/// 覆盖配置文件中的对应项，便于本地快速启动。
#[derive(Debug, Parser)]
#[command(name = "achievement-server", about = "成就账本 REST 服务")]
struct Cli {
    /// 监听端口，覆盖配置文件
    #[arg(long)]
    port: Option<u16>,

    /// 启动时填充演示数据
    #[arg(long)]
    seed: bool,

    /// 演示数据中随机发放的授予记录数
    #[arg(long, default_value_t = 10)]
    seed_awards: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 统一加载配置：config/{env}.toml + ACHIEVE_ 前缀环境变量
    let mut config = AppConfig::load("achievement-service").unwrap_or_default();
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    observability::init(&config.observability)?;

    info!("Starting achievement-service on {}", config.server_addr());

    let store = Arc::new(LedgerStore::new());
    let translator: Arc<dyn translate::Translator> =
        Arc::from(translate::from_config(&config.translation)?);

    if cli.seed {
        let summary = seed::populate(
            &store,
            &SeedConfig {
                award_count: cli.seed_awards,
            },
        )?;
        info!(
            users = summary.users,
            achievements = summary.achievements,
            awards = summary.awards,
            "Demo data seeded"
        );
    }

    let state = AppState::new(store, translator, &config.translation.canonical_lang);

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接，
    // 等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "achievement-service"
    }))
}

/// 监听关闭信号
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
