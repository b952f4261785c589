//! End-to-end checks over a recorded screen version: spec rendering,
//! asset classification and download naming.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use zeplin_cli::assets::{output_file_name, ScriptedChooser};
use zeplin_cli::output::Printer;
use zeplin_cli::render::{filter_by_section, layer_tree};
use zeplin_cli::{
    classify_assets, render_header, render_layers, AssetFormat, Codec, Downloader, Fetcher,
    FileNames, Layer, ReEncoder, ReencodeOptions, Result, ScreenVersion, ZeplinError,
};

fn fixture() -> ScreenVersion {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("screen_version.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn line_for<'a>(spec: &'a str, name: &str) -> &'a str {
    spec.lines()
        .find(|l| l.contains(&format!("[{}]", name)))
        .unwrap_or_else(|| panic!("no line for {name}"))
}

#[test]
fn test_spec_infers_layout() {
    let version = fixture();
    let top: Vec<&Layer> = version.layers.iter().collect();
    let spec = render_layers(&top, 3);

    let header = line_for(&spec, "Header");
    assert!(header.contains("bg: #123456"), "{header}");
    assert!(header.contains("row"), "{header}");
    assert!(header.contains("gap: 16px"), "{header}");

    let cards = line_for(&spec, "Cards");
    assert!(cards.contains("col"), "{cards}");
    assert!(cards.contains("gap: 16px"), "{cards}");

    let title = line_for(&spec, "Title");
    assert!(title.contains("text 200×24"), "{title}");
    assert!(spec.contains("text: \"Good morning\""));
}

#[test]
fn test_spec_header_block() {
    let header = render_header("Home", &fixture());
    assert_eq!(header[0], "Screen: Home (375×812, @2x)");
    assert_eq!(header[1], "Background: #FFFFFF");
}

#[test]
fn test_spec_depth_limit_collapses() {
    let version = fixture();
    let top: Vec<&Layer> = version.layers.iter().collect();
    let spec = render_layers(&top, 0);
    assert!(spec.contains("[...3 children]"));
    assert!(!spec.contains("[Header]"));
}

#[test]
fn test_section_filter_searches_children() {
    let version = fixture();
    let found = filter_by_section(&version.layers, "cards");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].display_name(), "Cards");
}

#[test]
fn test_detail_tree_lists_every_layer() {
    let lines = layer_tree(&fixture().layers, "");
    for name in ["Home", "Header", "ic_menu", "Title", "Card C", "Hero Banner"] {
        assert!(
            lines.iter().any(|l| l.contains(&format!("] {}", name))),
            "missing {name}"
        );
    }
}

#[test]
fn test_classification_of_fixture_assets() {
    let version = fixture();
    let mut chooser = ScriptedChooser::new([]);
    let classified = classify_assets(&version.assets, &mut FileNames::new(), &mut chooser).unwrap();

    assert!(chooser.asked.is_empty());
    let summary: Vec<(&str, AssetFormat, Option<f64>)> = classified
        .iter()
        .map(|a| (a.file_name.as_str(), a.format, a.content.density))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("ic_menu", AssetFormat::Svg, None),
            ("ic_search", AssetFormat::Png, Some(3.0)),
            ("hero_banner", AssetFormat::Png, Some(2.0)),
        ]
    );

    let options = ReencodeOptions::default();
    let names: Vec<String> = classified.iter().map(|a| output_file_name(a, &options)).collect();
    assert_eq!(names, vec!["ic_menu.svg", "ic_search.png", "hero_banner.webp"]);
}

struct UrlBytes(HashMap<String, Vec<u8>>);

impl Fetcher for UrlBytes {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.0.get(url).cloned().ok_or_else(|| ZeplinError::Http {
            message: "download failed: 500 Internal Server Error".to_string(),
        })
    }
}

struct Passthrough;

impl ReEncoder for Passthrough {
    fn reencode(&self, bytes: &[u8], _codec: Codec, _quality: u8) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

#[test]
fn test_download_isolates_middle_failure() {
    let version = fixture();
    let mut chooser = ScriptedChooser::new([]);
    let classified = classify_assets(&version.assets, &mut FileNames::new(), &mut chooser).unwrap();

    // Everything but the second asset's chosen content is reachable.
    let bytes: HashMap<String, Vec<u8>> = classified
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 1)
        .map(|(_, a)| (a.content.url.clone(), a.file_name.clone().into_bytes()))
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let downloader = Downloader::new(UrlBytes(bytes), Passthrough, ReencodeOptions::default());
    let report = downloader
        .download_all(&classified, dir.path(), &Printer::new())
        .unwrap();

    let ok: Vec<&str> = report.success.iter().map(|d| d.file_name.as_str()).collect();
    assert_eq!(ok, vec!["ic_menu.svg", "hero_banner.webp"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].file_name, "ic_search.png");
    assert_eq!(
        fs::read(dir.path().join("hero_banner.webp")).unwrap(),
        b"hero_banner"
    );
}
