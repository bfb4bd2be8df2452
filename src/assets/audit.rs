use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::image_info::{ImageInfo, ImageIssue, Recommendations};
use super::index::DirectoryIndex;
use super::library::decode_first;
use super::naming::NamingScheme;
use crate::config::AssetConfig;
use crate::constants::AUDIT_PREVIEW_FILES;
use crate::error::Result;
use crate::tile::TileKind;

/// 存在但无法解码的候选文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file: PathBuf,
    pub error: String,
}

/// 单种牌的审计状态
///
/// 与加载时的选择一致：按候选顺序取第一张能解码的图片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TileStatus {
    /// 找到且能解码；`skipped` 为排在它前面、解码失败的文件
    Found {
        file: PathBuf,
        info: ImageInfo,
        issues: Vec<ImageIssue>,
        skipped: Vec<SkippedFile>,
    },
    /// 有候选文件，但都无法解码
    Unreadable { failures: Vec<SkippedFile> },
    /// 没有任何候选文件
    Missing,
}

/// 单种牌的审计条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub code: String,
    pub label: String,
    #[serde(flatten)]
    pub status: TileStatus,
}

/// 图片目录审计报告
///
/// 对每种牌给出解析结果，并列出没有被任何牌认领的 PNG 文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub dir: PathBuf,
    /// 目录中所有 PNG 文件名（有序）
    pub files: Vec<String>,
    pub entries: Vec<AuditEntry>,
    /// 没有被认领的文件
    pub stray_files: Vec<String>,
}

impl AuditReport {
    /// 审计配置中的目录
    ///
    /// 审计只读，不会创建目录
    pub fn run(config: &AssetConfig) -> Result<Self> {
        config.validate()?;
        let index = DirectoryIndex::scan(&config.tiles_dir)?;
        let naming = NamingScheme::from_config(config)?;
        let rec = Recommendations::from(config);

        let entries = TileKind::all()
            .into_iter()
            .map(|kind| {
                let walk = decode_first(&index, &naming, kind);
                let skipped: Vec<SkippedFile> = walk
                    .failures
                    .into_iter()
                    .map(|(file, e)| SkippedFile {
                        file,
                        error: e.to_string(),
                    })
                    .collect();
                let status = match walk.decoded {
                    Some((file, format, image)) => {
                        let info = ImageInfo::from_image(format, &image);
                        let issues = info.issues(&rec);
                        TileStatus::Found {
                            file,
                            info,
                            issues,
                            skipped,
                        }
                    }
                    None if skipped.is_empty() => TileStatus::Missing,
                    None => TileStatus::Unreadable { failures: skipped },
                };
                AuditEntry {
                    code: kind.code(),
                    label: kind.label(),
                    status,
                }
            })
            .collect();

        let files: Vec<String> = index.files().map(|(name, _)| name.to_string()).collect();
        let stray_files = files
            .iter()
            .filter(|name| naming.claimant(name).is_none())
            .cloned()
            .collect();

        Ok(Self {
            dir: config.tiles_dir.clone(),
            files,
            entries,
            stray_files,
        })
    }

    /// 找到且能解码的数量
    pub fn found_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, TileStatus::Found { .. }))
            .count()
    }

    /// 缺失的数量
    pub fn missing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, TileStatus::Missing))
            .count()
    }

    /// 警告数量：每个无法解码的文件 + 每个警告级别的图片问题
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match &e.status {
                TileStatus::Found { issues, skipped, .. } => {
                    issues.iter().filter(|i| i.is_warning()).count() + skipped.len()
                }
                TileStatus::Unreadable { failures } => failures.len(),
                TileStatus::Missing => 0,
            })
            .sum()
    }

    /// 每种牌都找到了图片
    pub fn is_complete(&self) -> bool {
        self.found_count() == self.entries.len()
    }

    /// 缺失的牌代码
    pub fn missing_codes(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, TileStatus::Missing))
            .map(|e| e.code.as_str())
            .collect()
    }

    /// 查找某种牌的条目
    pub fn entry(&self, kind: TileKind) -> Option<&AuditEntry> {
        let code = kind.code();
        self.entries.iter().find(|e| e.code == code)
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "目录: {}", self.dir.display())?;
        if self.files.is_empty() {
            writeln!(f, "未找到图片，将使用占位图")?;
        } else {
            writeln!(f, "找到 {} 个 PNG 文件", self.files.len())?;
            for name in self.files.iter().take(AUDIT_PREVIEW_FILES) {
                writeln!(f, "  - {}", name)?;
            }
            if self.files.len() > AUDIT_PREVIEW_FILES {
                writeln!(f, "  … 以及另外 {} 个", self.files.len() - AUDIT_PREVIEW_FILES)?;
            }
        }

        writeln!(
            f,
            "已匹配 {}/{}，缺失 {}，警告 {}",
            self.found_count(),
            self.entries.len(),
            self.missing_count(),
            self.warning_count()
        )?;

        for entry in &self.entries {
            match &entry.status {
                TileStatus::Found { file, issues, skipped, .. } => {
                    for skip in skipped {
                        writeln!(f, "  {} ({}): 已跳过: {}", entry.code, skip.file.display(), skip.error)?;
                    }
                    for issue in issues {
                        let name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                        writeln!(f, "  {} ({}): {}", entry.code, name, issue)?;
                    }
                }
                TileStatus::Unreadable { failures } => {
                    for failure in failures {
                        writeln!(f, "  {} ({}): 无法读取: {}", entry.code, failure.file.display(), failure.error)?;
                    }
                }
                TileStatus::Missing => {}
            }
        }

        let missing = self.missing_codes();
        if !missing.is_empty() {
            writeln!(f, "缺失: {}", missing.join(", "))?;
        }
        if !self.stray_files.is_empty() {
            writeln!(f, "未被使用的文件: {}", self.stray_files.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_report() {
        let config = AssetConfig::with_dir(std::env::temp_dir().join("mahjong-assets-audit-none"));
        let report = AuditReport::run(&config).unwrap();
        assert_eq!(report.entries.len(), TileKind::KIND_COUNT);
        assert_eq!(report.missing_count(), TileKind::KIND_COUNT);
        assert_eq!(report.found_count(), 0);
        assert_eq!(report.warning_count(), 0);
        assert!(!report.is_complete());
        assert!(report.to_string().contains("将使用占位图"));
        assert!(!config.tiles_dir.exists());
    }

    #[test]
    fn test_report_serializes() {
        let config = AssetConfig::with_dir(std::env::temp_dir().join("mahjong-assets-audit-json"));
        let report = AuditReport::run(&config).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][0]["code"], "b1");
        assert_eq!(json["entries"][0]["status"], "missing");
    }
}
