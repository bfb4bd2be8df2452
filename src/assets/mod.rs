/// 牌图片资源模块
/// 
/// 候选文件名、目录索引、图片探测、占位图、图片库与审计

pub mod naming;
pub mod index;
pub mod image_info;
pub mod placeholder;
pub mod library;
pub mod audit;
pub mod sources;

// 重新导出常用类型
pub use naming::{candidate_names, Candidates, NamingScheme};
pub use index::DirectoryIndex;
pub use image_info::{ImageInfo, ImageIssue, Recommendations};
pub use placeholder::Placeholder;
pub use library::{resolve_loaded_path, resolve_path, LoadSummary, TileImage, TileImageLibrary};
pub use audit::{AuditEntry, AuditReport, SkippedFile, TileStatus};
pub use sources::{AssetSource, RECOMMENDED_SOURCES};
