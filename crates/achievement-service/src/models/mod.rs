//! 账本数据模型
//!
//! 三类记录：用户、成就定义、授予记录。
//! 记录一经创建即不可变，ID 由存储层单调递增分配。

pub mod achievement;
pub mod award;
pub mod user;

pub use achievement::Achievement;
pub use award::Award;
pub use user::User;

/// 可存储记录
///
/// 存储层通过该 trait 读取记录 ID，用于按主键查找。
pub trait Record {
    fn id(&self) -> i64;
}
