use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::imageops;
use image::{DynamicImage, ImageFormat, RgbaImage};

use super::image_info;
use super::index::DirectoryIndex;
use super::naming::NamingScheme;
use super::placeholder::Placeholder;
use crate::config::AssetConfig;
use crate::error::{AssetError, Result};
use crate::tile::TileKind;

/// 一种牌最终使用的图片
#[derive(Debug, Clone, PartialEq)]
pub enum TileImage {
    /// 从文件加载并缩放到牌尺寸
    Loaded {
        path: PathBuf,
        source_width: u32,
        source_height: u32,
        image: RgbaImage,
    },
    /// 未找到可用文件
    Placeholder(Placeholder),
}

impl TileImage {
    /// 缩放后（或占位图）的像素数据
    pub fn image(&self) -> &RgbaImage {
        match self {
            TileImage::Loaded { image, .. } => image,
            TileImage::Placeholder(ph) => &ph.image,
        }
    }

    /// 来源文件路径（占位图为 `None`）
    pub fn path(&self) -> Option<&Path> {
        match self {
            TileImage::Loaded { path, .. } => Some(path),
            TileImage::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TileImage::Placeholder(_))
    }
}

/// 加载摘要
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LoadSummary {
    pub loaded: usize,
    pub placeholders: usize,
}

/// 牌图片库
///
/// 为全部 42 种牌各保存一张图片：
/// 按候选文件名顺序查找 → 解码 → 缩放；都失败则使用占位图
#[derive(Debug, Clone)]
pub struct TileImageLibrary {
    dir: PathBuf,
    images: HashMap<TileKind, TileImage>,
}

impl TileImageLibrary {
    /// 按配置加载全部牌图片
    ///
    /// 单个文件解码失败只记录警告并尝试下一个候选名；
    /// 目录级别的 I/O 错误直接返回
    pub fn load(config: &AssetConfig) -> Result<Self> {
        config.validate()?;
        let dir = config.tiles_dir.clone();

        if !dir.exists() && config.create_missing_dir {
            fs::create_dir_all(&dir).map_err(|e| AssetError::io(&dir, e))?;
            log::info!("目录 {} 不存在，已创建；请把牌图片放入该目录", dir.display());
        }

        let index = DirectoryIndex::scan(&dir)?;
        let naming = NamingScheme::from_config(config)?;

        let mut images = HashMap::with_capacity(TileKind::KIND_COUNT);
        for kind in TileKind::all() {
            let image = match Self::load_first_match(config, &index, &naming, kind) {
                Some(loaded) => loaded,
                None => {
                    log::debug!("{} 没有可用图片，使用占位图", kind);
                    TileImage::Placeholder(Placeholder::new(
                        kind,
                        config.tile_width,
                        config.tile_height,
                        &config.placeholder,
                    )?)
                }
            };
            images.insert(kind, image);
        }

        let library = Self { dir, images };
        let summary = library.summary();
        if summary.loaded > 0 {
            log::info!(
                "已加载 {} 张牌图片，{} 种使用占位图",
                summary.loaded,
                summary.placeholders
            );
        } else {
            log::warn!(
                "未找到牌图片，全部使用占位图；请把图片放入 {}",
                library.dir.display()
            );
        }
        Ok(library)
    }

    /// 依次尝试候选文件名，返回第一张能解码的图片
    fn load_first_match(
        config: &AssetConfig,
        index: &DirectoryIndex,
        naming: &NamingScheme,
        kind: TileKind,
    ) -> Option<TileImage> {
        let walk = decode_first(index, naming, kind);
        for (path, e) in &walk.failures {
            log::warn!("加载 {} 失败: {}", path.display(), e);
        }
        let (path, _, decoded) = walk.decoded?;
        let image = imageops::resize(
            &decoded.to_rgba8(),
            config.tile_width,
            config.tile_height,
            config.filter.into(),
        );
        log::trace!("{} <- {}", kind, path.display());
        Some(TileImage::Loaded {
            path,
            source_width: decoded.width(),
            source_height: decoded.height(),
            image,
        })
    }

    /// 获取某种牌的图片
    pub fn get(&self, kind: TileKind) -> &TileImage {
        // load() 为每种牌都插入了一项
        &self.images[&kind]
    }

    /// 图片目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 成功加载的数量
    pub fn loaded_count(&self) -> usize {
        self.images.values().filter(|img| !img.is_placeholder()).count()
    }

    /// 使用占位图的数量
    pub fn placeholder_count(&self) -> usize {
        self.images.len() - self.loaded_count()
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            loaded: self.loaded_count(),
            placeholders: self.placeholder_count(),
        }
    }

    /// 按规范顺序遍历全部牌图片
    pub fn iter(&self) -> impl Iterator<Item = (TileKind, &TileImage)> {
        TileKind::all()
            .into_iter()
            .filter_map(move |kind| self.images.get(&kind).map(|img| (kind, img)))
    }
}

/// 按候选顺序逐个解码的结果
pub(crate) struct CandidateWalk {
    /// 第一张能解码的图片
    pub(crate) decoded: Option<(PathBuf, Option<ImageFormat>, DynamicImage)>,
    /// 在它之前存在但解码失败的文件
    pub(crate) failures: Vec<(PathBuf, AssetError)>,
}

/// 依次解码存在的候选文件，直到第一张成功为止
///
/// 加载、审计和 `resolve_loaded_path` 共用，保证三者选中同一个文件
pub(crate) fn decode_first(index: &DirectoryIndex, naming: &NamingScheme, kind: TileKind) -> CandidateWalk {
    let mut failures = Vec::new();
    for name in naming.candidates(kind) {
        let Some(path) = index.lookup(&name) else {
            continue;
        };
        match image_info::decode(path) {
            Ok((format, image)) => {
                return CandidateWalk {
                    decoded: Some((path.to_path_buf(), format, image)),
                    failures,
                };
            }
            Err(e) => failures.push((path.to_path_buf(), e)),
        }
    }
    CandidateWalk { decoded: None, failures }
}

/// 解析加载时实际使用的文件
///
/// 与 `TileImageLibrary::load` 一致：跳过无法解码的候选文件
pub fn resolve_loaded_path(config: &AssetConfig, kind: TileKind) -> Result<Option<PathBuf>> {
    let index = DirectoryIndex::scan(&config.tiles_dir)?;
    let naming = NamingScheme::from_config(config)?;
    Ok(decode_first(&index, &naming, kind).decoded.map(|(path, _, _)| path))
}

/// 只解析路径，不解码图片
///
/// 返回第一个存在的候选文件；不检查内容是否可解码
pub fn resolve_path(config: &AssetConfig, kind: TileKind) -> Result<Option<PathBuf>> {
    let index = DirectoryIndex::scan(&config.tiles_dir)?;
    let naming = NamingScheme::from_config(config)?;
    Ok(resolve_in(&index, &naming, kind))
}

/// 在已扫描的索引中解析路径
pub fn resolve_in(index: &DirectoryIndex, naming: &NamingScheme, kind: TileKind) -> Option<PathBuf> {
    naming
        .candidates(kind)
        .iter()
        .find_map(|name| index.lookup(name))
        .map(Path::to_path_buf)
}
