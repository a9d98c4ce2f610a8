//! 成就账本服务
//!
//! 记录用户获得的成就（带分值的徽章），并提供两类只读查询：
//! 按用户语言本地化的个人成就报告，以及全量账本上的排行榜统计。
//!
//! # 主要模块
//!
//! - `models`: 账本记录（用户、成就、授予）
//! - `store`: 内存账本存储与按字段过滤查询
//! - `report`: 个人成就报告（含按需翻译）
//! - `stats`: 排行榜统计引擎
//! - `translate`: 外部翻译服务适配器
//! - `seed`: 演示数据填充
//!
//! # 使用示例
//!
//! ```rust
//! use achievement_service::store::LedgerStore;
//! use achievement_service::stats::compute_statistics;
//!
//! let store = LedgerStore::new();
//! let user = store.create_user("Иван", "ru");
//! let badge = store.create_achievement("Пользователь", 25, "...").unwrap();
//! store.grant_award(user.id, badge.id, None).unwrap();
//!
//! let report = compute_statistics(&store);
//! assert_eq!(report.top_score.unwrap().total_points, 25);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod report;
pub mod routes;
pub mod seed;
pub mod state;
pub mod stats;
pub mod store;
pub mod translate;
