use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use mahjong_assets::assets::{ImageIssue, TileStatus};
use mahjong_assets::{AssetConfig, AuditReport, Dragon, Season, Suit, TileKind, Wind};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mahjong-assets-audit-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 带透明角的推荐尺寸 PNG
fn write_good_png(dir: &Path, name: &str) {
    let mut img = RgbaImage::from_pixel(60, 80, Rgba([250, 250, 250, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    img.save_with_format(dir.join(name), ImageFormat::Png).unwrap();
}

fn issues_of(report: &AuditReport, kind: TileKind) -> Vec<ImageIssue> {
    match &report.entry(kind).unwrap().status {
        TileStatus::Found { issues, .. } => issues.clone(),
        other => panic!("{} 期望 Found，得到 {:?}", kind, other),
    }
}

/// 完整目录：所有牌都找到，无警告
#[test]
fn test_complete_set() {
    let dir = scratch_dir("complete");
    for kind in TileKind::all() {
        write_good_png(&dir, &format!("{}.png", kind.code()));
    }

    let report = AuditReport::run(&AssetConfig::with_dir(&dir)).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.found_count(), TileKind::KIND_COUNT);
    assert_eq!(report.missing_count(), 0);
    assert_eq!(report.warning_count(), 0);
    assert!(report.stray_files.is_empty());
    assert_eq!(report.files.len(), TileKind::KIND_COUNT);

    // 预览只列出前 5 个文件
    let text = report.to_string();
    assert!(text.contains("找到 42 个 PNG 文件"));
    assert!(text.contains("以及另外 37 个"));
    fs::remove_dir_all(&dir).unwrap();
}

/// 各类问题：尺寸过小、内容不是 PNG、不透明、无法解码
#[test]
fn test_issues_detected() {
    let dir = scratch_dir("issues");

    // 尺寸过小
    let small = RgbaImage::from_pixel(30, 40, Rgba([0, 0, 0, 0]));
    small.save_with_format(dir.join("b1.png"), ImageFormat::Png).unwrap();

    // 扩展名是 png，内容是 BMP
    let bmp = RgbImage::from_pixel(60, 80, Rgb([1, 2, 3]));
    bmp.save_with_format(dir.join("Ton.png"), ImageFormat::Bmp).unwrap();

    // 不透明
    let opaque = RgbaImage::from_pixel(90, 120, Rgba([5, 5, 5, 255]));
    opaque.save_with_format(dir.join("spring.png"), ImageFormat::Png).unwrap();

    // 损坏
    fs::write(dir.join("zhong.png"), b"\x89PNG broken").unwrap();

    let report = AuditReport::run(&AssetConfig::with_dir(&dir)).unwrap();

    let small_issues = issues_of(&report, TileKind::Suited { suit: Suit::Bamboo, rank: 1 });
    assert_eq!(
        small_issues,
        vec![ImageIssue::TooSmall {
            width: 30,
            height: 40,
            min_width: 60,
            min_height: 80
        }]
    );

    let east_issues = issues_of(&report, TileKind::Wind(Wind::East));
    assert!(matches!(&east_issues[0], ImageIssue::NotPng { format } if format == "Bmp"));
    assert!(east_issues.contains(&ImageIssue::Opaque));

    let spring_issues = issues_of(&report, TileKind::Season(Season::Spring));
    assert_eq!(spring_issues, vec![ImageIssue::Opaque]);

    let red = report.entry(TileKind::Dragon(Dragon::Red)).unwrap();
    assert!(matches!(red.status, TileStatus::Unreadable { .. }));

    // TooSmall + NotPng + Unreadable；Opaque 只是提示
    assert_eq!(report.warning_count(), 3);
    assert_eq!(report.found_count(), 3);
    assert_eq!(report.missing_count(), TileKind::KIND_COUNT - 4);
    assert!(report.missing_codes().contains(&"b2"));
    fs::remove_dir_all(&dir).unwrap();
}

/// 未被任何牌认领的文件
#[test]
fn test_stray_files() {
    let dir = scratch_dir("stray");
    write_good_png(&dir, "Pin5.png");
    write_good_png(&dir, "background.png");
    write_good_png(&dir, "b10.png");
    fs::write(dir.join("notes.txt"), b"ignored").unwrap();

    let report = AuditReport::run(&AssetConfig::with_dir(&dir)).unwrap();
    assert_eq!(report.stray_files, vec!["b10.png".to_string(), "background.png".to_string()]);
    assert_eq!(report.files.len(), 3);
    assert!(report.to_string().contains("未被使用的文件: b10.png, background.png"));
    fs::remove_dir_all(&dir).unwrap();
}

/// 配置中的最小尺寸参与审计
#[test]
fn test_custom_minimum() {
    let dir = scratch_dir("minimum");
    write_good_png(&dir, "d1.png");

    let config = AssetConfig {
        min_width: 100,
        min_height: 100,
        ..AssetConfig::with_dir(&dir)
    };
    let report = AuditReport::run(&config).unwrap();
    let issues = issues_of(&report, TileKind::Suited { suit: Suit::Dots, rank: 1 });
    assert!(matches!(issues[0], ImageIssue::TooSmall { min_width: 100, .. }));
    fs::remove_dir_all(&dir).unwrap();
}

/// JSON 输出带有状态标签
#[test]
fn test_json_output() {
    let dir = scratch_dir("json");
    write_good_png(&dir, "Chun.png");

    let report = AuditReport::run(&AssetConfig::with_dir(&dir)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let entries = json["entries"].as_array().unwrap();
    let red = entries.iter().find(|e| e["code"] == "red_dragon").unwrap();
    assert_eq!(red["status"], "found");
    assert_eq!(red["label"], "中");
    assert_eq!(red["info"]["width"], 60);
    assert_eq!(red["issues"].as_array().unwrap().len(), 0);
    fs::remove_dir_all(&dir).unwrap();
}

/// 第一个候选文件损坏时，审计与加载选中同一个文件
#[test]
fn test_corrupt_candidate_matches_loader() {
    use mahjong_assets::assets::resolve_loaded_path;
    use mahjong_assets::TileImageLibrary;

    let dir = scratch_dir("fallthrough");
    fs::write(dir.join("Chun.png"), b"\x89PNG broken").unwrap();
    write_good_png(&dir, "red_dragon.png");

    let config = AssetConfig::with_dir(&dir);
    let red = TileKind::Dragon(Dragon::Red);

    let library = TileImageLibrary::load(&config).unwrap();
    let loaded = library.get(red).path().unwrap().to_path_buf();
    assert_eq!(loaded.file_name().unwrap(), "red_dragon.png");

    let report = AuditReport::run(&config).unwrap();
    match &report.entry(red).unwrap().status {
        TileStatus::Found { file, issues, skipped, .. } => {
            assert_eq!(file, &loaded);
            assert!(issues.is_empty());
            assert_eq!(skipped.len(), 1);
            assert_eq!(skipped[0].file.file_name().unwrap(), "Chun.png");
        }
        other => panic!("期望 Found，得到 {:?}", other),
    }
    // 损坏的文件仍算一条警告
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.found_count(), 1);
    assert!(report.to_string().contains("已跳过"));

    assert_eq!(resolve_loaded_path(&config, red).unwrap(), Some(loaded));
    fs::remove_dir_all(&dir).unwrap();
}

/// 所有候选文件都损坏
#[test]
fn test_all_candidates_unreadable() {
    let dir = scratch_dir("allbroken");
    fs::write(dir.join("Haku.png"), b"broken").unwrap();
    fs::write(dir.join("bai.png"), b"broken too").unwrap();

    let report = AuditReport::run(&AssetConfig::with_dir(&dir)).unwrap();
    match &report.entry(TileKind::Dragon(Dragon::White)).unwrap().status {
        TileStatus::Unreadable { failures } => {
            let names: Vec<_> = failures
                .iter()
                .map(|f| f.file.file_name().unwrap().to_string_lossy().into_owned())
                .collect();
            assert_eq!(names, vec!["Haku.png", "bai.png"]);
        }
        other => panic!("期望 Unreadable，得到 {:?}", other),
    }
    assert_eq!(report.warning_count(), 2);
    fs::remove_dir_all(&dir).unwrap();
}
