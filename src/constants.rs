/// 资源常量定义
///
/// 集中管理所有魔法数字，提高代码可维护性

/// 默认的牌图片目录
pub const DEFAULT_TILES_DIR: &str = "assets/tiles";

/// 牌图片缩放后的宽度（像素）
pub const TILE_WIDTH: u32 = 50;

/// 牌图片缩放后的高度（像素）
pub const TILE_HEIGHT: u32 = 70;

/// 推荐的源图片最小宽度
pub const MIN_SOURCE_WIDTH: u32 = 60;

/// 推荐的源图片最小高度
pub const MIN_SOURCE_HEIGHT: u32 = 80;

/// 牌面底色（奶油色）
pub const TILE_COLOR: [u8; 3] = [255, 255, 240];

/// 牌面边框颜色
pub const TILE_BORDER: [u8; 3] = [200, 200, 180];

/// 占位图文字颜色
pub const PLACEHOLDER_TEXT_COLOR: [u8; 3] = [0, 0, 0];

/// 占位图边框宽度
pub const PLACEHOLDER_BORDER_WIDTH: u32 = 2;

/// 图片文件扩展名
pub const IMAGE_EXTENSION: &str = "png";

/// 审计摘要中列出的文件数上限
pub const AUDIT_PREVIEW_FILES: usize = 5;
