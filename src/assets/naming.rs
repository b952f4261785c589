//! Icon detection and collision-free file naming.

use std::collections::HashSet;

/// Naming-convention guess that an asset is a UI icon.
///
/// Matches `icon` anywhere, or an `ic_`, `ic-` or `ico` prefix, ignoring
/// case. Over-matches on purpose: `iconography_label` counts as an icon.
pub fn is_icon(display_name: &str) -> bool {
    let name = display_name.to_lowercase();
    name.contains("icon")
        || name.starts_with("ic_")
        || name.starts_with("ic-")
        || name.starts_with("ico")
}

/// Base name used when sanitizing leaves nothing.
pub const FALLBACK_NAME: &str = "asset";

/// Lower-case, collapse every run of characters outside `[a-z0-9]` and
/// Hangul syllables into `_`, and trim underscores from both ends.
pub fn sanitize_file_name(display_name: &str) -> String {
    let mut out = String::with_capacity(display_name.len());
    let mut in_run = false;

    for c in display_name.to_lowercase().chars() {
        if is_name_char(c) {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ('가'..='힣').contains(&c)
}

/// File base names claimed during one classification run.
///
/// Owned by the caller and threaded through classification in asset order,
/// so separate runs never share state.
#[derive(Debug, Clone, Default)]
pub struct FileNames {
    claimed: HashSet<String>,
}

impl FileNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or the first free `base_NN` (01, 02, ...).
    pub fn claim(&mut self, base: &str) -> String {
        if self.claimed.insert(base.to_string()) {
            return base.to_string();
        }

        let mut suffix = 1u32;
        loop {
            let candidate = format!("{}_{:02}", base, suffix);
            if self.claimed.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_claimed(&self, name: &str) -> bool {
        self.claimed.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        for name in ["icon_close", "ic_close", "ICO-save", "Ico_home", "IC-menu", "Close Icon"] {
            assert!(is_icon(name), "{name} should be an icon");
        }
    }

    #[test]
    fn test_icon_substring_over_matches() {
        // Intentional: the substring rule catches unrelated words.
        assert!(is_icon("iconography_label"));
        assert!(is_icon("silicon_wafer"));
    }

    #[test]
    fn test_non_icon_names() {
        for name in ["hero_banner", "background", "logic_board", "pic_profile"] {
            assert!(!is_icon(name), "{name} should not be an icon");
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_file_name("Close Icon!!"), "close_icon");
        assert_eq!(sanitize_file_name("  Hero / Banner @2x "), "hero_banner_2x");
        assert_eq!(sanitize_file_name("__ic--arrow__"), "ic_arrow");
        assert_eq!(sanitize_file_name("아이콘 닫기"), "아이콘_닫기");
        assert_eq!(sanitize_file_name("Café"), "caf");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize_file_name("!!!"), FALLBACK_NAME);
        assert_eq!(sanitize_file_name(""), FALLBACK_NAME);
    }

    #[test]
    fn test_claim_suffixes() {
        let mut names = FileNames::new();
        assert_eq!(names.claim("close_icon"), "close_icon");
        assert_eq!(names.claim("close_icon"), "close_icon_01");
        assert_eq!(names.claim("close_icon"), "close_icon_02");
        assert!(names.is_claimed("close_icon_02"));
        assert!(!names.is_claimed("close_icon_03"));
    }

    #[test]
    fn test_claim_skips_taken_suffix() {
        let mut names = FileNames::new();
        names.claim("logo_01");
        names.claim("logo");
        assert_eq!(names.claim("logo"), "logo_02");
        assert!(names.is_claimed("logo_02"));
    }
}
