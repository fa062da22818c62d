//! 存储层 - 名册 JSON 文档
//!
//! 整个名册存放在一个 JSON 文件里，每次操作都是整读整写。
//! [`DocumentStore`] 用一把异步互斥锁串行化所有写入，避免并发
//! read-modify-write 导致的丢失更新。

mod document;

pub use document::{DocumentStore, Transaction};
