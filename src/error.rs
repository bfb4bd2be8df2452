/// 资源加载错误类型

use std::path::PathBuf;

use thiserror::Error;

/// 资源解析与加载的错误
#[derive(Error, Debug)]
pub enum AssetError {
    /// 文件系统错误
    #[error("读写 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 图片解码失败
    #[error("无法解码图片 {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 配置文件解析失败
    #[error("配置文件 {path} 无效: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 报告序列化失败
    #[error("序列化报告失败: {0}")]
    Report(#[from] serde_json::Error),

    /// 未知的牌代码
    #[error("未知的牌代码: {0}")]
    UnknownTile(String),

    /// 配置值不合法
    #[error("配置无效: {0}")]
    InvalidConfig(String),
}

impl AssetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Io { path: path.into(), source }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        AssetError::Image { path: path.into(), source }
    }
}

/// 资源操作的结果类型
pub type Result<T> = std::result::Result<T, AssetError>;
