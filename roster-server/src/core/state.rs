use crate::core::Config;
use crate::services::{MemberService, PhotoManager, RecordService};
use crate::store::DocumentStore;
use crate::utils::AppResult;

/// 服务器状态 - 持有所有服务的单例引用
///
/// 所有字段都是廉价 Clone (内部为 Arc 或路径)，每个请求拿到一份拷贝。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | DocumentStore | 名册 JSON 文档 |
/// | photos | PhotoManager | 照片目录 |
/// | members | MemberService | 队员服务 |
/// | records | RecordService | 记录服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 名册文档存储 (单写者)
    pub store: DocumentStore,
    /// 照片管理
    pub photos: PhotoManager,
    /// 队员服务
    pub members: MemberService,
    /// 记录服务
    pub records: RecordService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据文件 (不存在时写入空名册)
    /// 2. 照片目录
    /// 3. 各服务
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let store = DocumentStore::open(&config.data_file).await?;

        let photos = PhotoManager::new(&config.uploads_dir, config.max_photo_bytes);
        photos.initialize().await?;

        let members = MemberService::new(store.clone(), photos.clone());
        let records = RecordService::new(store.clone());

        tracing::info!(
            data_file = %config.data_file.display(),
            uploads_dir = %config.uploads_dir.display(),
            "Server state initialized"
        );

        Ok(Self {
            config: config.clone(),
            store,
            photos,
            members,
            records,
        })
    }
}
