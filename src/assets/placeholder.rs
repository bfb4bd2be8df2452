use image::{Rgba, RgbaImage};

use crate::config::PlaceholderStyle;
use crate::error::{AssetError, Result};
use crate::tile::TileKind;

/// 占位图
///
/// 找不到图片时使用：奶油色底 + 边框，文字由调用方绘制
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub kind: TileKind,
    /// 应绘制在中央的文字（牌代码）
    pub text: String,
    /// 显示标签（如 `中`、`1B`）
    pub label: String,
    pub text_color: [u8; 3],
    pub image: RgbaImage,
}

impl Placeholder {
    /// 生成占位图
    ///
    /// # 参数
    ///
    /// - `kind`: 牌的种类
    /// - `width` / `height`: 尺寸，必须大于 0
    /// - `style`: 颜色与边框宽度
    pub fn new(kind: TileKind, width: u32, height: u32, style: &PlaceholderStyle) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidConfig(format!(
                "占位图尺寸必须大于 0，当前为 {}x{}",
                width, height
            )));
        }

        let [r, g, b] = style.fill;
        let fill = Rgba([r, g, b, u8::MAX]);
        let [r, g, b] = style.border;
        let border = Rgba([r, g, b, u8::MAX]);
        let bw = style.border_width;

        let image = RgbaImage::from_fn(width, height, |x, y| {
            let on_border = x < bw || y < bw || x >= width.saturating_sub(bw) || y >= height.saturating_sub(bw);
            if on_border {
                border
            } else {
                fill
            }
        });

        Ok(Self {
            kind,
            text: kind.code(),
            label: kind.label(),
            text_color: style.text,
            image,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
