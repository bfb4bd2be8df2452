use std::fmt;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use serde::Serialize;

use crate::config::AssetConfig;
use crate::error::{AssetError, Result};

/// 源图片的推荐属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendations {
    pub min_width: u32,
    pub min_height: u32,
}

impl From<&AssetConfig> for Recommendations {
    fn from(config: &AssetConfig) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
        }
    }
}

/// 不符合推荐的地方
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageIssue {
    /// 内容不是 PNG（无论扩展名是什么）
    NotPng { format: String },
    /// 尺寸低于推荐的最小值
    TooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    /// 没有透明像素（推荐透明背景，仅提示）
    Opaque,
}

impl ImageIssue {
    /// 是否算作警告（`Opaque` 只是提示）
    pub fn is_warning(&self) -> bool {
        !matches!(self, ImageIssue::Opaque)
    }
}

impl fmt::Display for ImageIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageIssue::NotPng { format } => write!(f, "不是 PNG（实际格式 {}）", format),
            ImageIssue::TooSmall {
                width,
                height,
                min_width,
                min_height,
            } => write!(f, "尺寸 {}x{} 小于推荐的 {}x{}", width, height, min_width, min_height),
            ImageIssue::Opaque => f.write_str("没有透明背景"),
        }
    }
}

/// 图片探测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// 按内容识别的格式
    pub format: Option<String>,
    pub is_png: bool,
    pub width: u32,
    pub height: u32,
    /// 是否带 alpha 通道
    pub has_alpha: bool,
    /// 是否存在不完全不透明的像素
    pub has_transparency: bool,
}

/// 打开并解码图片，格式按文件内容识别
pub(crate) fn decode(path: &Path) -> Result<(Option<ImageFormat>, DynamicImage)> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| AssetError::io(path, e))?;
    let format = reader.format();
    let image = reader.decode().map_err(|e| AssetError::image(path, e))?;
    Ok((format, image))
}

impl ImageInfo {
    /// 探测一张图片
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (format, image) = decode(path.as_ref())?;
        Ok(Self::from_image(format, &image))
    }

    /// 从已解码的图片生成探测结果
    pub fn from_image(format: Option<ImageFormat>, image: &DynamicImage) -> Self {
        let has_alpha = image.color().has_alpha();
        let has_transparency = has_alpha && image.to_rgba8().pixels().any(|p| p.0[3] < u8::MAX);
        Self {
            format: format.map(|f| format!("{:?}", f)),
            is_png: format == Some(ImageFormat::Png),
            width: image.width(),
            height: image.height(),
            has_alpha,
            has_transparency,
        }
    }

    /// 对照推荐属性检查
    ///
    /// 更大的图片不算问题，加载时会自动缩放
    pub fn issues(&self, rec: &Recommendations) -> Vec<ImageIssue> {
        let mut issues = Vec::new();
        if !self.is_png {
            issues.push(ImageIssue::NotPng {
                format: self.format.clone().unwrap_or_else(|| "unknown".to_string()),
            });
        }
        if self.width < rec.min_width || self.height < rec.min_height {
            issues.push(ImageIssue::TooSmall {
                width: self.width,
                height: self.height,
                min_width: rec.min_width,
                min_height: rec.min_height,
            });
        }
        if !self.has_transparency {
            issues.push(ImageIssue::Opaque);
        }
        issues
    }
}
