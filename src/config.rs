use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{AssetError, Result};
use crate::tile::TileKind;

/// 缩放滤波器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ScaleFilter> for FilterType {
    fn from(filter: ScaleFilter) -> Self {
        match filter {
            ScaleFilter::Nearest => FilterType::Nearest,
            ScaleFilter::Triangle => FilterType::Triangle,
            ScaleFilter::CatmullRom => FilterType::CatmullRom,
            ScaleFilter::Gaussian => FilterType::Gaussian,
            ScaleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// 占位图样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderStyle {
    pub fill: [u8; 3],
    pub border: [u8; 3],
    pub text: [u8; 3],
    pub border_width: u32,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            fill: TILE_COLOR,
            border: TILE_BORDER,
            text: PLACEHOLDER_TEXT_COLOR,
            border_width: PLACEHOLDER_BORDER_WIDTH,
        }
    }
}

/// 资源加载配置
///
/// 所有字段都有默认值，JSON 中可以只写需要覆盖的部分：
///
/// ```json
/// { "tiles_dir": "art/tiles", "filter": "lanczos3", "aliases": { "b1": ["bird.png"] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// 牌图片目录
    pub tiles_dir: PathBuf,
    /// 缩放后的宽度
    pub tile_width: u32,
    /// 缩放后的高度
    pub tile_height: u32,
    /// 推荐的源图片最小宽度（仅用于审计）
    pub min_width: u32,
    /// 推荐的源图片最小高度（仅用于审计）
    pub min_height: u32,
    pub filter: ScaleFilter,
    /// 目录不存在时是否自动创建
    pub create_missing_dir: bool,
    /// 额外文件名：牌代码 -> 文件名列表，优先于内置名称
    pub aliases: BTreeMap<String, Vec<String>>,
    pub placeholder: PlaceholderStyle,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            tiles_dir: PathBuf::from(DEFAULT_TILES_DIR),
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            min_width: MIN_SOURCE_WIDTH,
            min_height: MIN_SOURCE_HEIGHT,
            filter: ScaleFilter::default(),
            create_missing_dir: true,
            aliases: BTreeMap::new(),
            placeholder: PlaceholderStyle::default(),
        }
    }
}

impl AssetConfig {
    /// 使用默认值，仅替换目录
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            tiles_dir: dir.into(),
            ..Self::default()
        }
    }

    /// 从 JSON 字符串加载配置并校验
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AssetConfig = serde_json::from_str(json).map_err(|source| AssetError::Config {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置并校验
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        let config: AssetConfig = serde_json::from_str(&content).map_err(|source| AssetError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// - 缩放尺寸不能为 0
    /// - `aliases` 的键必须是已知的牌代码
    pub fn validate(&self) -> Result<()> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(AssetError::InvalidConfig(format!(
                "牌尺寸必须大于 0，当前为 {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        for code in self.aliases.keys() {
            code.parse::<TileKind>()?;
        }
        Ok(())
    }
}
