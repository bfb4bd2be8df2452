/// 麻将牌图片资源库
/// 
/// 把牌的逻辑身份（条/筒/万 1-9、风、箭、花、季节）解析为图片文件，
/// 缩放到牌尺寸；找不到时回退到带文字的占位图

pub mod tile;
pub mod assets;
pub mod config;
pub mod constants;
pub mod error;

// 重新导出常用类型
pub use tile::{Category, Dragon, Flower, Season, Suit, TileKind, Wind};
pub use assets::{AuditReport, NamingScheme, Placeholder, TileImage, TileImageLibrary};
pub use config::{AssetConfig, PlaceholderStyle, ScaleFilter};
pub use error::{AssetError, Result};

// Python 绑定模块
// PyO3 宏会生成 non-local impl
#[cfg(feature = "python")]
#[allow(non_local_definitions)]
pub mod python;
