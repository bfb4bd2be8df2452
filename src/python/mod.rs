/// Python 绑定模块
/// 
/// 提供 PyO3 接口，供 Python 前端按同样的约定查找牌图片

use pyo3::prelude::*;

use crate::assets::{resolve_loaded_path, NamingScheme};
use crate::config::AssetConfig;
use crate::tile::TileKind;

fn parse_kind(code: &str) -> PyResult<TileKind> {
    code.parse()
        .map_err(|e: crate::error::AssetError| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// 所有牌代码（规范顺序）
#[pyfunction]
pub fn tile_codes() -> Vec<String> {
    TileKind::all().into_iter().map(|kind| kind.code()).collect()
}

/// 某种牌的候选文件名
#[pyfunction]
pub fn candidate_names(code: &str) -> PyResult<Vec<String>> {
    let kind = parse_kind(code)?;
    Ok(NamingScheme::new().candidates(kind).into_vec())
}

/// 在目录中解析某种牌的图片路径，找不到时返回 None
///
/// # 参数
///
/// - `dir`: 图片目录
/// - `code`: 牌代码（如 "b1"、"east"）
#[pyfunction]
pub fn resolve_tile(dir: &str, code: &str) -> PyResult<Option<String>> {
    let kind = parse_kind(code)?;
    let config = AssetConfig::with_dir(dir);
    resolve_loaded_path(&config, kind)
        .map(|path| path.map(|p| p.to_string_lossy().into_owned()))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

/// Python 模块初始化
#[pymodule]
fn mahjong_assets(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(pyo3::wrap_pyfunction!(tile_codes, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(candidate_names, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(resolve_tile, m)?)?;
    Ok(())
}
