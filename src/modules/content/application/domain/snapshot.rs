//! Persisted layout of the local-only store.
//!
//! Current layout: `{"version": 1, "content": SiteContent}`.
//! Legacy layout (no version tag): the bare content object as written by the
//! browser build, where optional strings were stored as `""` and service icons
//! were framework objects. Legacy snapshots are migrated on read.

use serde::{Deserialize, Serialize};

use super::entities::{
    MediaItem, Project, ProjectStatus, Review, Service, ServiceIcon, SiteContent, Task,
    WorkExperience,
};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Fixed key the whole snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "portfolio_site_data";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed snapshot: {0}")]
    Malformed(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u64),
}

#[derive(Serialize)]
struct SnapshotEnvelopeRef<'a> {
    version: u32,
    content: &'a SiteContent,
}

#[derive(Deserialize)]
struct SnapshotEnvelope {
    content: SiteContent,
}

pub fn encode_snapshot(content: &SiteContent) -> Result<String, SnapshotError> {
    serde_json::to_string(&SnapshotEnvelopeRef {
        version: SNAPSHOT_VERSION,
        content,
    })
    .map_err(|e| SnapshotError::Malformed(e.to_string()))
}

pub fn decode_snapshot(raw: &str) -> Result<SiteContent, SnapshotError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| SnapshotError::Malformed(e.to_string()))?;

    match value.get("version") {
        Some(version) => {
            let version = version
                .as_u64()
                .ok_or_else(|| SnapshotError::Malformed("version is not a number".to_string()))?;

            if version != SNAPSHOT_VERSION as u64 {
                return Err(SnapshotError::UnsupportedVersion(version));
            }

            serde_json::from_value::<SnapshotEnvelope>(value)
                .map(|envelope| envelope.content)
                .map_err(|e| SnapshotError::Malformed(e.to_string()))
        }
        None => serde_json::from_value::<LegacySiteContent>(value)
            .map(LegacySiteContent::migrate)
            .map_err(|e| SnapshotError::Malformed(e.to_string())),
    }
}

//
// ──────────────────────────────────────────────────────────
// Legacy (unversioned) layout
// ──────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySiteContent {
    projects: Vec<LegacyProject>,
    work_experience: Vec<LegacyWorkExperience>,
    reviews: Vec<LegacyReview>,
    services: Vec<LegacyService>,
    #[serde(default)]
    resume_url: String,
    #[serde(default)]
    media: Vec<MediaItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyProject {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tech_stack: Vec<String>,
    status: ProjectStatus,
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    deadline: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    live_link: String,
    #[serde(default)]
    github_link: String,
    #[serde(default)]
    is_published: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyWorkExperience {
    id: String,
    company: String,
    role: String,
    duration: String,
    #[serde(default)]
    contributions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyReview {
    id: String,
    client_name: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    image: String,
    review_text: String,
    rating: i32,
}

// `icon` held a rendered element; it is ignored and re-resolved by id.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyService {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    enabled: bool,
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl LegacySiteContent {
    fn migrate(self) -> SiteContent {
        SiteContent {
            projects: self
                .projects
                .into_iter()
                .map(|p| Project {
                    id: p.id,
                    title: p.title,
                    description: p.description,
                    tech_stack: p.tech_stack,
                    status: p.status,
                    tasks: p.tasks,
                    deadline: non_empty(p.deadline),
                    image: p.image,
                    live_link: non_empty(p.live_link),
                    github_link: non_empty(p.github_link),
                    is_published: p.is_published,
                })
                .collect(),
            work_experience: self
                .work_experience
                .into_iter()
                .enumerate()
                .map(|(position, e)| WorkExperience {
                    id: e.id,
                    company: e.company,
                    role: e.role,
                    duration: e.duration,
                    contributions: e.contributions,
                    sort_order: position as i32,
                })
                .collect(),
            reviews: self
                .reviews
                .into_iter()
                .map(|r| Review {
                    id: r.id,
                    client_name: r.client_name,
                    company: r.company,
                    image: non_empty(r.image),
                    review_text: r.review_text,
                    rating: r.rating,
                })
                .collect(),
            services: self
                .services
                .into_iter()
                .map(|s| Service {
                    icon: ServiceIcon::for_service_id(&s.id),
                    id: s.id,
                    title: s.title,
                    description: s.description,
                    enabled: s.enabled,
                })
                .collect(),
            resume_url: self.resume_url,
            media: self.media,
        }
    }
}
