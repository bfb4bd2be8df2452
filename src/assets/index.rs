use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::IMAGE_EXTENSION;
use crate::error::{AssetError, Result};

/// 图片目录索引
///
/// 扫描一次目录中的 `*.png`（扩展名不区分大小写，不递归），
/// 之后的查找都在内存中完成：
/// - 精确文件名优先
/// - 否则按小写折叠后匹配；多个文件折叠后同名时取排序最靠前的
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    dir: PathBuf,
    /// 实际文件名 -> 完整路径（有序，便于稳定输出）
    exact: BTreeMap<String, PathBuf>,
    /// 小写文件名 -> 实际文件名
    folded: HashMap<String, String>,
}

impl DirectoryIndex {
    /// 扫描目录
    ///
    /// 目录不存在时返回空索引；其它 I/O 错误向上传播
    pub fn scan<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut index = Self {
            dir: dir.to_path_buf(),
            ..Self::default()
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("目录 {} 不存在，索引为空", dir.display());
                return Ok(index);
            }
            Err(e) => return Err(AssetError::io(dir, e)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| AssetError::io(dir, e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_png = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION));
            if !is_png {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                index.exact.insert(name.to_string(), path.clone());
            }
        }

        // BTreeMap 按名称升序遍历，先插入者优先
        for name in index.exact.keys() {
            index
                .folded
                .entry(name.to_lowercase())
                .or_insert_with(|| name.clone());
        }

        log::debug!("索引 {}：{} 个 PNG 文件", dir.display(), index.exact.len());
        Ok(index)
    }

    /// 被索引的目录
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 查找文件
    pub fn lookup(&self, name: &str) -> Option<&Path> {
        if let Some(path) = self.exact.get(name) {
            return Some(path);
        }
        self.folded
            .get(&name.to_lowercase())
            .and_then(|actual| self.exact.get(actual))
            .map(PathBuf::as_path)
    }

    /// 按名称排序的全部文件
    pub fn files(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.exact.iter().map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// 文件数量
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
