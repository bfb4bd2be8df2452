/// 牌相关模块
/// 
/// 包含牌的种类（TileKind）及其花色、风、箭、花、季节的定义

pub mod tile;

// 重新导出常用类型
pub use tile::{Category, Dragon, Flower, Season, Suit, TileKind, Wind};
