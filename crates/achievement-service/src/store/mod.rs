//! 账本存储
//!
//! 纯数据访问层：三张插入有序的内存表，不含业务聚合逻辑。

pub mod ledger;
pub mod table;

pub use ledger::LedgerStore;
pub use table::Table;
