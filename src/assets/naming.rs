use std::collections::HashMap;

use smallvec::SmallVec;

use crate::config::AssetConfig;
use crate::constants::IMAGE_EXTENSION;
use crate::error::Result;
use crate::tile::{Dragon, Flower, Season, Suit, TileKind, Wind};

/// 候选文件名列表（绝大多数牌不超过 8 个，使用栈分配）
pub type Candidates = SmallVec<[String; 8]>;

/// 日式（立直麻将）素材包的序数牌前缀
fn riichi_suit_prefix(suit: Suit) -> &'static str {
    match suit {
        Suit::Bamboo => "Sou",
        Suit::Dots => "Pin",
        Suit::Characters => "Man",
    }
}

/// 序数牌英文词干
fn suit_word(suit: Suit) -> &'static str {
    match suit {
        Suit::Bamboo => "bamboo",
        Suit::Dots => "dot",
        Suit::Characters => "wan",
    }
}

/// 内置候选文件名，按优先级排列
///
/// 日式素材包名称优先，其后是通用命名约定：
/// - 序数牌：`Sou1` / `b1` / `bamboo1` / `1b` / `bamboo_1`（筒、万另有 `circle1`、`character1`）
/// - 风牌：`Ton` / `east` / `wind_east` / `e`
/// - 三元牌：`Chun` / `red_dragon` / `dragon_red` / `rd` / `zhong`
/// - 花牌：`flower_plum` / `plum` / `fp`
/// - 季节：`season_spring` / `spring` / `ss`
pub fn candidate_names(kind: TileKind) -> Candidates {
    let mut stems: SmallVec<[String; 8]> = SmallVec::new();
    match kind {
        TileKind::Suited { suit, rank } => {
            let letter = suit.letter();
            let word = suit_word(suit);
            stems.push(format!("{}{}", riichi_suit_prefix(suit), rank));
            stems.push(format!("{}{}", letter, rank));
            stems.push(format!("{}{}", word, rank));
            stems.push(format!("{}{}", rank, letter));
            stems.push(format!("{}_{}", word, rank));
            match suit {
                Suit::Dots => stems.push(format!("circle{}", rank)),
                Suit::Characters => stems.push(format!("character{}", rank)),
                Suit::Bamboo => {}
            }
        }
        TileKind::Wind(wind) => {
            let (riichi, letter) = match wind {
                Wind::East => ("Ton", "e"),
                Wind::South => ("Nan", "s"),
                Wind::West => ("Shaa", "w"),
                Wind::North => ("Pei", "n"),
            };
            stems.push(riichi.to_string());
            stems.push(wind.name().to_string());
            stems.push(format!("wind_{}", wind.name()));
            stems.push(letter.to_string());
        }
        TileKind::Dragon(dragon) => {
            let (riichi, short, pinyin) = match dragon {
                Dragon::Red => ("Chun", "rd", "zhong"),
                Dragon::Green => ("Hatsu", "gd", "fa"),
                Dragon::White => ("Haku", "wd", "bai"),
            };
            stems.push(riichi.to_string());
            stems.push(format!("{}_dragon", dragon.color()));
            stems.push(format!("dragon_{}", dragon.color()));
            stems.push(short.to_string());
            stems.push(pinyin.to_string());
        }
        TileKind::Flower(flower) => {
            let (full, short) = match flower {
                Flower::Plum => ("plum", "fp"),
                Flower::Orchid => ("orchid", "fo"),
                Flower::Chrysanthemum => ("chrysanthemum", "fc"),
                // "bamboo" 单独使用会和条子混淆
                Flower::Bamboo => ("bamboo_flower", "fb"),
            };
            stems.push(format!("flower_{}", flower.short_name()));
            stems.push(full.to_string());
            stems.push(short.to_string());
        }
        TileKind::Season(season) => {
            let short = match season {
                Season::Spring => "ss",
                Season::Summer => "ssu",
                Season::Autumn => "sa",
                Season::Winter => "sw",
            };
            stems.push(format!("season_{}", season.name()));
            stems.push(season.name().to_string());
            stems.push(short.to_string());
        }
    }

    stems
        .into_iter()
        .map(|stem| format!("{}.{}", stem, IMAGE_EXTENSION))
        .collect()
}

/// 补全扩展名：不以 `.png` 结尾（不区分大小写）的别名一律追加 `.png`
///
/// 目录索引只收录 PNG，`kaze.east`、`tile.v2` 这类名字按词干处理
fn with_extension(name: &str) -> String {
    let name = name.trim();
    let suffix = format!(".{}", IMAGE_EXTENSION);
    if name.to_ascii_lowercase().ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

/// 命名方案：用户别名 + 内置候选名
///
/// 别名优先；结果按不区分大小写去重，保留第一次出现的位置
#[derive(Debug, Clone, Default)]
pub struct NamingScheme {
    aliases: HashMap<TileKind, Vec<String>>,
}

impl NamingScheme {
    /// 只使用内置名称
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置中的 `aliases` 构建
    pub fn from_config(config: &AssetConfig) -> Result<Self> {
        let mut scheme = Self::new();
        for (code, names) in &config.aliases {
            let kind: TileKind = code.parse()?;
            for name in names {
                scheme.add_alias(kind, name);
            }
        }
        Ok(scheme)
    }

    /// 为某种牌添加一个额外文件名
    pub fn add_alias(&mut self, kind: TileKind, name: &str) {
        if name.trim().is_empty() {
            return;
        }
        self.aliases.entry(kind).or_default().push(with_extension(name));
    }

    /// 获取某种牌的全部候选文件名（按优先级）
    pub fn candidates(&self, kind: TileKind) -> Candidates {
        let mut result = Candidates::new();
        let aliases = self.aliases.get(&kind).into_iter().flatten().cloned();
        for name in aliases.chain(candidate_names(kind)) {
            if !result.iter().any(|existing: &String| existing.eq_ignore_ascii_case(&name)) {
                result.push(name);
            }
        }
        result
    }

    /// 反查：某个文件名被哪种牌认领（不区分大小写）
    pub fn claimant(&self, file_name: &str) -> Option<TileKind> {
        TileKind::all()
            .into_iter()
            .find(|&kind| self.candidates(kind).iter().any(|c| c.eq_ignore_ascii_case(file_name)))
    }
}
