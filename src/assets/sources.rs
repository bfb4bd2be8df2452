/// 推荐的牌图片来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AssetSource {
    pub name: &'static str,
    pub url: &'static str,
    /// 站内搜索关键词
    pub search: &'static str,
}

pub const RECOMMENDED_SOURCES: [AssetSource; 4] = [
    AssetSource {
        name: "OpenGameArt",
        url: "https://opengameart.org/",
        search: "mahjong tiles",
    },
    AssetSource {
        name: "Kenney",
        url: "https://kenney.nl/assets",
        search: "mahjong",
    },
    AssetSource {
        name: "itch.io",
        url: "https://itch.io/game-assets/free",
        search: "mahjong tiles",
    },
    AssetSource {
        name: "GitHub",
        url: "https://github.com/search?q=mahjong+tiles+sprites",
        search: "mahjong tiles sprites",
    },
];
