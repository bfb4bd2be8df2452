use std::fmt;
use std::str::FromStr;

use crate::error::AssetError;

/// 序数牌花色
///
/// 条（竹）、筒（饼）、万各 1-9
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Bamboo = 0,
    Dots = 1,
    Characters = 2,
}

impl Suit {
    /// 所有花色
    pub fn all() -> [Suit; 3] {
        [Suit::Bamboo, Suit::Dots, Suit::Characters]
    }

    /// 代码前缀字母：b / d / w
    pub fn letter(&self) -> char {
        match self {
            Suit::Bamboo => 'b',
            Suit::Dots => 'd',
            Suit::Characters => 'w',
        }
    }

    /// 标签中使用的大写字母
    pub fn label_letter(&self) -> char {
        self.letter().to_ascii_uppercase()
    }
}

/// 风牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    pub fn all() -> [Wind; 4] {
        [Wind::East, Wind::South, Wind::West, Wind::North]
    }

    /// 英文小写名（east/south/west/north）
    pub fn name(&self) -> &'static str {
        match self {
            Wind::East => "east",
            Wind::South => "south",
            Wind::West => "west",
            Wind::North => "north",
        }
    }
}

/// 三元牌（箭牌）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dragon {
    Red,
    Green,
    White,
}

impl Dragon {
    pub fn all() -> [Dragon; 3] {
        [Dragon::Red, Dragon::Green, Dragon::White]
    }

    /// 颜色名（red/green/white）
    pub fn color(&self) -> &'static str {
        match self {
            Dragon::Red => "red",
            Dragon::Green => "green",
            Dragon::White => "white",
        }
    }
}

/// 花牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flower {
    Plum,
    Orchid,
    Chrysanthemum,
    Bamboo,
}

impl Flower {
    pub fn all() -> [Flower; 4] {
        [Flower::Plum, Flower::Orchid, Flower::Chrysanthemum, Flower::Bamboo]
    }

    /// 代码中使用的短名（菊花缩写为 chrys）
    pub fn short_name(&self) -> &'static str {
        match self {
            Flower::Plum => "plum",
            Flower::Orchid => "orchid",
            Flower::Chrysanthemum => "chrys",
            Flower::Bamboo => "bamboo",
        }
    }

    /// 完整英文名
    pub fn full_name(&self) -> &'static str {
        match self {
            Flower::Plum => "plum",
            Flower::Orchid => "orchid",
            Flower::Chrysanthemum => "chrysanthemum",
            Flower::Bamboo => "bamboo",
        }
    }
}

/// 季节牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn all() -> [Season; 4] {
        [Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

/// 牌的大类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Suit,
    Wind,
    Dragon,
    Flower,
    Season,
}

/// 牌的种类（逻辑身份，不区分同种牌的不同副本）
///
/// 一副完整的牌共 42 种、144 张：
/// - 序数牌 27 种（条、筒、万 1-9），每种 4 张
/// - 风牌 4 种、三元牌 3 种，每种 4 张
/// - 花牌 4 种、季节牌 4 种，每种 1 张
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Suited { suit: Suit, rank: u8 },
    Wind(Wind),
    Dragon(Dragon),
    Flower(Flower),
    Season(Season),
}

impl TileKind {
    /// 种类总数：42
    pub const KIND_COUNT: usize = 42;

    /// 一副牌的总张数：144
    pub const TOTAL_TILES: usize = 144;

    /// 序数牌的数字范围：1-9
    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// 创建一张序数牌，验证数字范围
    pub fn suited(suit: Suit, rank: u8) -> Option<Self> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return None;
        }
        Some(TileKind::Suited { suit, rank })
    }

    /// 按规范顺序列出所有 42 种牌
    ///
    /// 条 1-9、筒 1-9、万 1-9、东南西北、中发白、四花、四季
    pub fn all() -> Vec<TileKind> {
        let mut kinds = Vec::with_capacity(Self::KIND_COUNT);
        for suit in Suit::all() {
            for rank in Self::MIN_RANK..=Self::MAX_RANK {
                kinds.push(TileKind::Suited { suit, rank });
            }
        }
        kinds.extend(Wind::all().into_iter().map(TileKind::Wind));
        kinds.extend(Dragon::all().into_iter().map(TileKind::Dragon));
        kinds.extend(Flower::all().into_iter().map(TileKind::Flower));
        kinds.extend(Season::all().into_iter().map(TileKind::Season));
        kinds
    }

    /// 获取大类
    pub fn category(&self) -> Category {
        match self {
            TileKind::Suited { .. } => Category::Suit,
            TileKind::Wind(_) => Category::Wind,
            TileKind::Dragon(_) => Category::Dragon,
            TileKind::Flower(_) => Category::Flower,
            TileKind::Season(_) => Category::Season,
        }
    }

    /// 一副牌中该种牌的张数
    pub fn copies(&self) -> u8 {
        match self.category() {
            Category::Flower | Category::Season => 1,
            _ => 4,
        }
    }

    /// 稳定的文本代码（如 `b1`、`east`、`red_dragon`、`flower_chrys`）
    pub fn code(&self) -> String {
        match self {
            TileKind::Suited { suit, rank } => format!("{}{}", suit.letter(), rank),
            TileKind::Wind(w) => w.name().to_string(),
            TileKind::Dragon(d) => format!("{}_dragon", d.color()),
            TileKind::Flower(f) => format!("flower_{}", f.short_name()),
            TileKind::Season(s) => format!("season_{}", s.name()),
        }
    }

    /// 显示用短标签（如 `1B`、`東`、`中`）
    pub fn label(&self) -> String {
        let glyph = match self {
            TileKind::Suited { suit, rank } => {
                return format!("{}{}", rank, suit.label_letter());
            }
            TileKind::Wind(Wind::East) => "東",
            TileKind::Wind(Wind::South) => "南",
            TileKind::Wind(Wind::West) => "西",
            TileKind::Wind(Wind::North) => "北",
            TileKind::Dragon(Dragon::Red) => "中",
            TileKind::Dragon(Dragon::Green) => "發",
            TileKind::Dragon(Dragon::White) => "白",
            TileKind::Flower(Flower::Plum) => "梅",
            TileKind::Flower(Flower::Orchid) => "蘭",
            TileKind::Flower(Flower::Chrysanthemum) => "菊",
            TileKind::Flower(Flower::Bamboo) => "竹",
            TileKind::Season(Season::Spring) => "春",
            TileKind::Season(Season::Summer) => "夏",
            TileKind::Season(Season::Autumn) => "秋",
            TileKind::Season(Season::Winter) => "冬",
        };
        glyph.to_string()
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for TileKind {
    type Err = AssetError;

    /// 解析文本代码（忽略大小写和首尾空白）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        TileKind::all()
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| AssetError::UnknownTile(s.trim().to_string()))
    }
}
