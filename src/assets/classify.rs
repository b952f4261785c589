//! Asset classification and content selection.
//!
//! Each asset is checked against the icon naming heuristic, given a unique
//! file base name, and resolved to exactly one content variant. Icons prefer
//! vector content and fall back to raster; everything else is raster only.
//! Assets without content in the required format are dropped silently.

use crate::error::Result;
use crate::types::{Asset, AssetContent, AssetFormat};

use super::chooser::Chooser;
use super::naming::{is_icon, sanitize_file_name, FileNames};

/// Format tried first for icons.
pub const VECTOR_FORMAT: AssetFormat = AssetFormat::Svg;

/// Raster format used for non-icons and as the icon fallback.
pub const RASTER_FORMAT: AssetFormat = AssetFormat::Png;

/// Density picked automatically when three or more densities exist.
pub const PREFERRED_DENSITY: f64 = 2.0;

/// An asset resolved to one downloadable content variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedAsset {
    pub display_name: String,
    /// Collision-free base name (no extension).
    pub file_name: String,
    pub format: AssetFormat,
    pub is_icon: bool,
    pub content: AssetContent,
}

/// Outcome of looking for content in one format.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// No content of the format exists.
    Unavailable,
    /// Exactly one variant was picked.
    Chosen(&'a AssetContent),
    /// Three or more densities and none is the preferred one.
    Ambiguous,
}

/// Pick a content variant of `format` without asking anyone.
///
/// With fewer than three density-bearing variants the highest density wins
/// (missing density counts as 0). With three or more, only an exact `@2x`
/// is accepted; anything else is ambiguous.
pub fn select_content(contents: &[AssetContent], format: AssetFormat) -> Selection<'_> {
    let matching: Vec<&AssetContent> = contents.iter().filter(|c| c.format == format).collect();

    match matching[..] {
        [] => return Selection::Unavailable,
        [only] => return Selection::Chosen(only),
        _ => {}
    }

    let with_density: Vec<&AssetContent> = matching
        .iter()
        .copied()
        .filter(|c| c.density.is_some())
        .collect();

    if with_density.len() < 3 {
        let highest = with_density
            .iter()
            .copied()
            .reduce(|best, c| if density(c) > density(best) { c } else { best });
        return Selection::Chosen(highest.unwrap_or(matching[0]));
    }

    with_density
        .into_iter()
        .find(|c| c.density == Some(PREFERRED_DENSITY))
        .map_or(Selection::Ambiguous, Selection::Chosen)
}

fn density(content: &AssetContent) -> f64 {
    content.density.unwrap_or(0.0)
}

/// Ask the user which density of `format` to download.
///
/// Options are the density-bearing variants in ascending density order,
/// labelled `@{density}x ({format})`.
pub fn prompt_for_density<C: Chooser>(
    chooser: &mut C,
    asset: &Asset,
    format: AssetFormat,
) -> Result<AssetContent> {
    let mut options: Vec<&AssetContent> = asset
        .contents
        .iter()
        .filter(|c| c.format == format && c.density.is_some())
        .collect();
    options.sort_by(|a, b| density(a).total_cmp(&density(b)));

    let options: Vec<(String, AssetContent)> = options
        .into_iter()
        .map(|c| (format!("@{}x ({})", density(c), c.format), c.clone()))
        .collect();

    chooser.choose(
        &format!("Choose a density for \"{}\":", asset.display_name),
        options,
    )
}

/// Classify assets in input order.
///
/// `names` is the run's file name namespace: every asset claims a name in
/// order, even one that is later dropped for lack of content. The chooser
/// is asked at most once per asset, strictly in asset order.
pub fn classify_assets<C: Chooser>(
    assets: &[Asset],
    names: &mut FileNames,
    chooser: &mut C,
) -> Result<Vec<ClassifiedAsset>> {
    let mut classified = Vec::with_capacity(assets.len());

    for asset in assets {
        let icon = is_icon(&asset.display_name);
        let file_name = names.claim(&sanitize_file_name(&asset.display_name));

        let formats: &[AssetFormat] = if icon {
            &[VECTOR_FORMAT, RASTER_FORMAT]
        } else {
            &[RASTER_FORMAT]
        };

        for &format in formats {
            let content = match select_content(&asset.contents, format) {
                Selection::Unavailable => continue,
                Selection::Chosen(content) => content.clone(),
                Selection::Ambiguous => prompt_for_density(chooser, asset, format)?,
            };

            classified.push(ClassifiedAsset {
                display_name: asset.display_name.clone(),
                file_name,
                format,
                is_icon: icon,
                content,
            });
            break;
        }
    }

    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::chooser::ScriptedChooser;

    fn png(density: f64) -> AssetContent {
        AssetContent::new(format!("https://cdn/a@{}x.png", density), AssetFormat::Png, Some(density))
    }

    fn svg() -> AssetContent {
        AssetContent::new("https://cdn/a.svg", AssetFormat::Svg, None)
    }

    fn classify(assets: &[Asset]) -> (Vec<ClassifiedAsset>, ScriptedChooser) {
        let mut chooser = ScriptedChooser::new([]);
        let result = classify_assets(assets, &mut FileNames::new(), &mut chooser).unwrap();
        (result, chooser)
    }

    #[test]
    fn test_icon_prefers_svg() {
        let assets = [Asset::new("ic_close", vec![png(1.0), svg(), png(2.0)])];
        let (result, _) = classify(&assets);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].format, AssetFormat::Svg);
        assert!(result[0].is_icon);
        assert_eq!(result[0].content, svg());
    }

    #[test]
    fn test_icon_falls_back_to_png_highest_of_two() {
        let assets = [Asset::new("icon_back", vec![png(1.0), png(3.0)])];
        let (result, chooser) = classify(&assets);

        assert_eq!(result[0].format, AssetFormat::Png);
        assert_eq!(result[0].content.density, Some(3.0));
        assert!(chooser.asked.is_empty());
    }

    #[test]
    fn test_three_densities_pick_2x() {
        let assets = [Asset::new("icon_back", vec![png(1.0), png(2.0), png(3.0)])];
        let (result, chooser) = classify(&assets);

        assert_eq!(result[0].content.density, Some(2.0));
        assert!(chooser.asked.is_empty());
    }

    #[test]
    fn test_ambiguous_densities_prompt_once_ascending() {
        let assets = [Asset::new("icon_back", vec![png(3.0), png(1.0), png(1.5)])];
        let mut chooser = ScriptedChooser::new([1]);
        let result = classify_assets(&assets, &mut FileNames::new(), &mut chooser).unwrap();

        assert_eq!(chooser.asked.len(), 1);
        assert_eq!(
            chooser.asked[0].1,
            vec!["@1x (png)", "@1.5x (png)", "@3x (png)"]
        );
        assert!(chooser.asked[0].0.contains("icon_back"));
        assert_eq!(result[0].content.density, Some(1.5));
    }

    #[test]
    fn test_non_icon_is_png_only() {
        let assets = [
            Asset::new("hero_banner", vec![svg()]),
            Asset::new("hero_image", vec![svg(), png(2.0)]),
        ];
        let (result, _) = classify(&assets);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].display_name, "hero_image");
        assert_eq!(result[0].format, AssetFormat::Png);
        assert!(!result[0].is_icon);
    }

    #[test]
    fn test_icon_without_content_dropped() {
        let pdf = AssetContent::new("https://cdn/a.pdf", AssetFormat::Pdf, None);
        let assets = [Asset::new("ic_pdf_only", vec![pdf]), Asset::new("ic_empty", vec![])];
        let (result, _) = classify(&assets);
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_names_get_suffixes_in_order() {
        let assets = [
            Asset::new("Close Icon!!", vec![svg()]),
            Asset::new("Close Icon!!", vec![svg()]),
        ];
        let (result, _) = classify(&assets);

        assert_eq!(result[0].file_name, "close_icon");
        assert_eq!(result[1].file_name, "close_icon_01");
    }

    #[test]
    fn test_dropped_asset_still_claims_name() {
        let assets = [
            Asset::new("banner", vec![svg()]),
            Asset::new("banner", vec![png(1.0)]),
        ];
        let mut names = FileNames::new();
        let mut chooser = ScriptedChooser::new([]);
        let result = classify_assets(&assets, &mut names, &mut chooser).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "banner_01");
        assert!(names.is_claimed("banner"));
    }

    #[test]
    fn test_separate_runs_do_not_share_names() {
        let assets = [Asset::new("logo", vec![png(1.0)])];
        let (first, _) = classify(&assets);
        let (second, _) = classify(&assets);
        assert_eq!(first[0].file_name, "logo");
        assert_eq!(second[0].file_name, "logo");
    }

    #[test]
    fn test_select_content_without_densities_takes_first() {
        let a = AssetContent::new("first", AssetFormat::Png, None);
        let b = AssetContent::new("second", AssetFormat::Png, None);
        let contents = [a.clone(), b];
        assert_eq!(select_content(&contents, AssetFormat::Png), Selection::Chosen(&a));
    }

    #[test]
    fn test_select_content_single_variant() {
        let contents = [svg(), png(3.0)];
        assert_eq!(
            select_content(&contents, AssetFormat::Png),
            Selection::Chosen(&contents[1])
        );
    }

    #[test]
    fn test_select_content_highest_ignores_undefined() {
        let none = AssetContent::new("none", AssetFormat::Png, None);
        let contents = [none, png(1.0), png(2.0)];
        // Two density-bearing variants: highest wins.
        assert_eq!(
            select_content(&contents, AssetFormat::Png),
            Selection::Chosen(&contents[2])
        );
    }

    #[test]
    fn test_select_content_unavailable() {
        assert_eq!(select_content(&[svg()], AssetFormat::Png), Selection::Unavailable);
    }

    #[test]
    fn test_select_content_ambiguous() {
        let contents = [png(1.0), png(1.5), png(3.0), png(4.0)];
        assert_eq!(select_content(&contents, AssetFormat::Png), Selection::Ambiguous);
    }
}
