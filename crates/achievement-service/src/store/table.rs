//! 内存表
//!
//! 插入有序的泛型内存表，RwLock 保护，支持并发读写。
//! ID 由原子计数器从 1 起单调分配，空过滤查询按插入顺序返回全表。

use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::Record;

/// 泛型内存表
///
/// 读操作返回记录的克隆，调用方不持有任何锁，
/// 因此聚合计算和外部服务调用期间表仍可被并发写入。
#[derive(Debug)]
pub struct Table<T> {
    next_id: AtomicI64,
    rows: RwLock<Vec<T>>,
}

impl<T: Record + Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone> Table<T> {
    /// 创建空表，ID 从 1 开始分配
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            rows: RwLock::new(Vec::new()),
        }
    }

    /// 分配新 ID 并插入由回调构造的记录
    ///
    /// 返回插入后的记录克隆。ID 分配与插入之间不保证其他写入不插队，
    /// 但 ID 本身全局唯一且单调。
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = build(id);
        self.rows.write().push(row.clone());
        row
    }

    /// 按主键查找
    pub fn get(&self, id: i64) -> Option<T> {
        self.rows.read().iter().find(|r| r.id() == id).cloned()
    }

    /// 检查是否存在指定 ID 的记录
    pub fn contains(&self, id: i64) -> bool {
        self.rows.read().iter().any(|r| r.id() == id)
    }

    /// 列出所有记录，按插入顺序
    pub fn list(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    /// 按条件筛选记录，保持插入顺序
    pub fn list_by<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// 获取记录总数
    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    /// 清空所有记录
    ///
    /// ID 计数器不回退，已分配的 ID 不会被复用
    pub fn clear(&self) {
        self.rows.write().clear();
    }
}
