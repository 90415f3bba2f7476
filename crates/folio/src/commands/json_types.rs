use serde::Serialize;

use folio_core::{LastUpdated, ProjectStats};

/// JSON shape of `folio stats --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput {
    pub total: usize,
    /// RFC 3339 timestamp of the most recent create/update, null when empty
    pub last_updated: Option<String>,
    pub last_updated_label: String,
}

impl From<ProjectStats> for StatsOutput {
    fn from(stats: ProjectStats) -> Self {
        let last_updated = match stats.last_updated {
            LastUpdated::At { at, .. } => Some(at.to_rfc3339()),
            LastUpdated::None => None,
        };
        Self {
            total: stats.total,
            last_updated,
            last_updated_label: stats.last_updated.to_string(),
        }
    }
}
