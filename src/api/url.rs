//! Screen URL parsing.

use reqwest::Url;

use crate::error::{Result, ZeplinError};

/// Host serving the Zeplin web app.
pub const APP_HOST: &str = "app.zeplin.io";

/// Project and screen identifiers taken from a screen URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRef {
    pub project_id: String,
    pub screen_id: String,
}

impl std::str::FromStr for ScreenRef {
    type Err = ZeplinError;

    fn from_str(s: &str) -> Result<Self> {
        parse_screen_url(s)
    }
}

/// Parse `https://app.zeplin.io/project/{projectId}/screen/{screenId}`.
///
/// The `project` and `screen` segments may appear anywhere in the path;
/// each must be followed by a non-empty identifier.
pub fn parse_screen_url(input: &str) -> Result<ScreenRef> {
    let url = Url::parse(input.trim()).map_err(|e| ZeplinError::InvalidUrl {
        message: format!("{} ({})", input, e),
    })?;

    if url.host_str() != Some(APP_HOST) {
        return Err(ZeplinError::InvalidUrl {
            message: format!("expected host {}, got {}", APP_HOST, url.host_str().unwrap_or("none")),
        });
    }

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let project_id = segment_after(&segments, "project").ok_or_else(|| ZeplinError::InvalidUrl {
        message: "missing project id".to_string(),
    })?;
    let screen_id = segment_after(&segments, "screen").ok_or_else(|| ZeplinError::InvalidUrl {
        message: "missing screen id".to_string(),
    })?;

    Ok(ScreenRef {
        project_id: project_id.to_string(),
        screen_id: screen_id.to_string(),
    })
}

fn segment_after<'a>(segments: &[&'a str], key: &str) -> Option<&'a str> {
    segments
        .iter()
        .position(|s| *s == key)
        .and_then(|i| segments.get(i + 1))
        .copied()
}
