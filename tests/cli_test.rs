use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{ImageFormat, Rgba, RgbaImage};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mahjong-assets-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([250, 250, 250, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    img.save_with_format(dir.join(name), ImageFormat::Png).unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mahjong-assets"))
        .arg("--dir")
        .arg(dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

/// --strict 时有警告返回非零退出码
#[test]
fn test_audit_strict_exit_code() {
    let dir = scratch_dir("strict");
    write_png(&dir, "b1.png", 30, 40);

    let relaxed = run(&dir, &["audit"]);
    assert!(relaxed.status.success());
    assert!(String::from_utf8_lossy(&relaxed.stdout).contains("警告 1"));

    let strict = run(&dir, &["audit", "--strict"]);
    assert!(!strict.status.success());
    fs::remove_dir_all(&dir).unwrap();
}

/// 没有警告时 --strict 正常退出（缺失的牌不算警告）
#[test]
fn test_audit_strict_clean_dir() {
    let dir = scratch_dir("clean");
    write_png(&dir, "east.png", 60, 80);

    let output = run(&dir, &["audit", "--strict", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["entries"].as_array().unwrap().len(), 42);
    fs::remove_dir_all(&dir).unwrap();
}

/// resolve 输出加载时实际使用的文件
#[test]
fn test_resolve_skips_corrupt_candidate() {
    let dir = scratch_dir("resolve");
    fs::write(dir.join("Chun.png"), b"\x89PNG broken").unwrap();
    write_png(&dir, "red_dragon.png", 60, 80);

    let output = run(&dir, &["resolve", "red_dragon"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("red_dragon.png"), "输出: {}", stdout);

    let missing = run(&dir, &["resolve", "season_winter"]);
    assert_eq!(String::from_utf8_lossy(&missing.stdout).trim(), "placeholder (season_winter)");
    fs::remove_dir_all(&dir).unwrap();
}

/// 未知的牌代码
#[test]
fn test_unknown_code_fails() {
    let dir = scratch_dir("unknown");
    let output = run(&dir, &["names", "joker"]);
    assert!(!output.status.success());
    fs::remove_dir_all(&dir).unwrap();
}
