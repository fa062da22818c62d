//! Photo Manager
//!
//! 负责照片文件的写入与清理。两种上传形态 (裁剪后的 base64 data URI、
//! multipart 原始文件) 都先归一成 `(bytes, extension)` 再交给 [`PhotoManager::store`]。

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::utils::{AppError, AppResult};

/// Public URL prefix photos are served under
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Supported image formats for direct file uploads
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Extension given to photos that arrive as base64 data URIs
const DATA_URI_EXTENSION: &str = "jpg";

/// Standard alphabet, `=` padding optional
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Photo attached to a create/update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoInput {
    /// Client-side cropped image, `data:image/...;base64,...`
    DataUri(String),
    /// Raw file part from a multipart upload
    File { filename: String, data: Vec<u8> },
}

/// 照片管理服务
#[derive(Clone, Debug)]
pub struct PhotoManager {
    /// 照片目录
    dir: PathBuf,
    /// 单张照片大小上限 (字节)
    max_bytes: usize,
}

impl PhotoManager {
    /// 创建照片管理服务
    ///
    /// `dir` 是照片存储目录的完整路径
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    /// 确保照片目录存在
    pub async fn initialize(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create uploads directory {}: {}",
                self.dir.display(),
                e
            ))
        })
    }

    /// 写入照片，返回可供前端使用的公开路径 (`/uploads/<file>`)
    pub async fn store(&self, data: &[u8], extension: &str) -> AppResult<String> {
        self.check_size(data)?;

        let filename = format!("{}.{}", shared::util::snowflake_id(), extension);
        let file_path = self.dir.join(&filename);

        tokio::fs::write(&file_path, data)
            .await
            .map_err(|e| AppError::upload(format!("Failed to save {}: {}", filename, e)))?;

        tracing::info!(file = %filename, size = data.len(), "Photo stored");

        Ok(format!("{}{}", UPLOADS_PREFIX, filename))
    }

    /// 写入 base64 data URI (`data:image/png;base64,....`)
    ///
    /// 无论源编码如何，文件一律以 `.jpg` 结尾。
    pub async fn store_data_uri(&self, data_uri: &str) -> AppResult<String> {
        let (data, ext) = decode_data_uri(data_uri)?;
        self.store(&data, ext).await
    }

    /// 写入 multipart 原始文件，保留原扩展名
    pub async fn store_file(&self, original_name: &str, data: &[u8]) -> AppResult<String> {
        let ext = file_extension(original_name)?;
        validate_image(data, &ext)?;
        self.store(data, &ext).await
    }

    /// 把任一输入形态归一成 `(bytes, extension)`，不落盘
    ///
    /// 调用方可以先校验新照片，再删除旧照片。
    pub fn decode(&self, input: &PhotoInput) -> AppResult<DecodedPhoto> {
        let (data, extension) = match input {
            PhotoInput::DataUri(data_uri) => {
                let (data, ext) = decode_data_uri(data_uri)?;
                (data, ext.to_string())
            }
            PhotoInput::File { filename, data } => {
                let ext = file_extension(filename)?;
                validate_image(data, &ext)?;
                (data.clone(), ext)
            }
        };
        self.check_size(&data)?;
        Ok(DecodedPhoto { data, extension })
    }

    /// 写入已归一的照片
    pub async fn store_decoded(&self, photo: &DecodedPhoto) -> AppResult<String> {
        self.store(&photo.data, &photo.extension).await
    }

    /// 按输入形态分派到对应的写入方式
    pub async fn store_input(&self, input: &PhotoInput) -> AppResult<String> {
        match input {
            PhotoInput::DataUri(data_uri) => self.store_data_uri(data_uri).await,
            PhotoInput::File { filename, data } => self.store_file(filename, data).await,
        }
    }

    /// 删除照片文件
    ///
    /// 文件不存在时静默返回；其他失败只记录警告，不影响调用方。
    pub async fn remove(&self, photo: &str) {
        let Some(path) = self.path_for(photo) else {
            tracing::warn!(photo = %photo, "Refusing to remove photo outside uploads directory");
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::info!(photo = %photo, "Photo removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(photo = %photo, error = %e, "Failed to remove photo"),
        }
    }

    fn check_size(&self, data: &[u8]) -> AppResult<()> {
        if data.is_empty() {
            return Err(AppError::upload("Empty image provided"));
        }
        if data.len() > self.max_bytes {
            return Err(AppError::upload(format!(
                "Image too large. Maximum size is {} bytes",
                self.max_bytes
            )));
        }
        Ok(())
    }

    /// 公开文件名 → 磁盘路径，拒绝路径穿越
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        is_safe_filename(filename).then(|| self.dir.join(filename))
    }

    /// 公开路径 (`/uploads/<file>`) → 磁盘路径
    fn path_for(&self, photo: &str) -> Option<PathBuf> {
        let filename = photo.strip_prefix(UPLOADS_PREFIX).unwrap_or(photo);
        self.resolve(filename)
    }
}

/// Image bytes plus the extension they will be stored under
#[derive(Debug, Clone)]
pub struct DecodedPhoto {
    pub data: Vec<u8>,
    pub extension: String,
}

fn decode_data_uri(data_uri: &str) -> AppResult<(Vec<u8>, &'static str)> {
    let payload: String = strip_data_uri_prefix(data_uri.trim())
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let data = LENIENT_BASE64
        .decode(payload)
        .map_err(|e| AppError::upload(format!("Malformed base64 image: {}", e)))?;
    Ok((data, DATA_URI_EXTENSION))
}

fn file_extension(original_name: &str) -> AppResult<String> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| AppError::upload(format!("Invalid file extension for: {}", original_name)))
}

/// Strip a `data:image/<kind>;base64,` header if present
fn strip_data_uri_prefix(data_uri: &str) -> &str {
    match data_uri.strip_prefix("data:image/") {
        Some(rest) => match rest.split_once(";base64,") {
            Some((kind, payload)) if !kind.is_empty() && !kind.contains([',', ';']) => payload,
            _ => data_uri,
        },
        None => data_uri,
    }
}

fn is_safe_filename(filename: &str) -> bool {
    !(filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\'))
}

/// Validate image file
fn validate_image(data: &[u8], ext: &str) -> AppResult<()> {
    if !SUPPORTED_FORMATS.contains(&ext) {
        return Err(AppError::upload(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Sniff magic bytes; decoding the whole image is not needed to store it
    if let Err(e) = image::guess_format(data) {
        return Err(AppError::upload(format!(
            "Invalid image file ({}): {}",
            ext, e
        )));
    }

    Ok(())
}
