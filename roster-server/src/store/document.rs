//! Document Store
//!
//! Load / save of the whole roster document plus a write transaction that
//! holds the single-writer lock across load → mutate → save.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shared::Document;
use tokio::sync::{Mutex, MutexGuard};

use crate::utils::{AppError, AppResult};

/// 名册文档存储
#[derive(Clone, Debug)]
pub struct DocumentStore {
    path: PathBuf,
    /// 序列化所有读写，防止 read-modify-write 竞争
    lock: Arc<Mutex<()>>,
}

impl DocumentStore {
    /// 打开存储，文件不存在时写入空文档
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let store = Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        };

        if let Some(parent) = store.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        if !tokio::fs::try_exists(&store.path).await.unwrap_or(false) {
            tracing::info!(path = %store.path.display(), "Initializing empty roster document");
            write_document(&store.path, &Document::new()).await?;
        }

        Ok(store)
    }

    /// 读取完整文档
    pub async fn load(&self) -> AppResult<Document> {
        let _guard = self.lock.lock().await;
        read_document(&self.path).await
    }

    /// 写入完整文档
    pub async fn save(&self, document: &Document) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        write_document(&self.path, document).await
    }

    /// 开启写事务
    ///
    /// 持有写锁直到 [`Transaction::commit`] 或被丢弃；丢弃时不写盘。
    pub async fn begin(&self) -> AppResult<Transaction<'_>> {
        let guard = self.lock.lock().await;
        let document = read_document(&self.path).await?;
        Ok(Transaction {
            store: self,
            document,
            _guard: guard,
        })
    }
}

/// 写事务 - 持有写锁与内存中的文档副本
pub struct Transaction<'a> {
    store: &'a DocumentStore,
    document: Document,
    _guard: MutexGuard<'a, ()>,
}

impl Transaction<'_> {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// 写盘并释放写锁
    pub async fn commit(self) -> AppResult<()> {
        write_document(&self.store.path, &self.document).await
    }
}

async fn read_document(path: &Path) -> AppResult<Document> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::storage(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_slice(&content)
        .map_err(|e| AppError::storage(format!("Failed to parse {}: {}", path.display(), e)))
}

async fn write_document(path: &Path, document: &Document) -> AppResult<()> {
    let content = serde_json::to_vec_pretty(document)
        .map_err(|e| AppError::storage(format!("Failed to serialize roster: {}", e)))?;
    tokio::fs::write(path, content)
        .await
        .map_err(|e| AppError::storage(format!("Failed to write {}: {}", path.display(), e)))
}
