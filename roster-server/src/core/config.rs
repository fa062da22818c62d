use std::path::PathBuf;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT / HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATA_FILE | data.json | 名册数据文件 |
/// | UPLOADS_DIR | uploads | 照片目录 |
/// | PUBLIC_DIR | public | 静态页面目录 |
/// | MAX_BODY_BYTES | 10485760 | 请求体上限 |
/// | MAX_PHOTO_BYTES | 5242880 | 单张照片上限 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (设置后按天滚动写文件) |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DATA_FILE=/srv/roster/data.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 名册 JSON 文件路径
    pub data_file: PathBuf,
    /// 照片上传目录
    pub uploads_dir: PathBuf,
    /// 静态页面根目录
    pub public_dir: PathBuf,
    /// 请求体大小上限 (字节)
    pub max_body_bytes: usize,
    /// 单张照片大小上限 (字节)
    pub max_photo_bytes: usize,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("PORT")
                .or_else(|| env_parse("HTTP_PORT"))
                .unwrap_or(3000),
            data_file: std::env::var("DATA_FILE")
                .unwrap_or_else(|_| "data.json".into())
                .into(),
            uploads_dir: std::env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| "uploads".into())
                .into(),
            public_dir: std::env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "public".into())
                .into(),
            max_body_bytes: env_parse("MAX_BODY_BYTES").unwrap_or(10 * 1024 * 1024),
            max_photo_bytes: env_parse("MAX_PHOTO_BYTES").unwrap_or(5 * 1024 * 1024),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS").unwrap_or(10000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义路径覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_paths(
        data_file: impl Into<PathBuf>,
        uploads_dir: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        let mut config = Self::from_env();
        config.data_file = data_file.into();
        config.uploads_dir = uploads_dir.into();
        config.public_dir = public_dir.into();
        config
    }
}
