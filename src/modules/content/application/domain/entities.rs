use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::image_list::split_image_urls;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Idea,
    Planning,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Idea => "idea",
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project status: {0}")]
pub struct UnknownProjectStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownProjectStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "idea" => Ok(ProjectStatus::Idea),
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(UnknownProjectStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_name: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub status: ProjectStatus,
    pub tasks: Vec<Task>,
    pub deadline: Option<String>,
    /// Comma-joined image URLs, see [`super::image_list`].
    pub image: String,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub is_published: bool,
}

impl Project {
    pub fn image_urls(&self) -> Vec<String> {
        split_image_urls(&self.image)
    }

    /// (completed, total)
    pub fn task_progress(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.is_completed).count();
        (completed, self.tasks.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub role: String,
    /// Free-text label such as "2021 – Present".
    pub duration: String,
    pub contributions: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
}

pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub client_name: String,
    pub company: String,
    pub image: Option<String>,
    pub review_text: String,
    pub rating: i32,
}

impl Review {
    /// One entry per star slot, the first `rating` of them filled.
    pub fn rating_indicators(&self) -> [bool; MAX_RATING as usize] {
        let filled = self.rating.clamp(0, MAX_RATING) as usize;
        let mut stars = [false; MAX_RATING as usize];
        for star in stars.iter_mut().take(filled) {
            *star = true;
        }
        stars
    }
}

/// Glyph key resolved by the front end; never renderable state.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    Globe,
    Smartphone,
    Apple,
    Megaphone,
    Search,
    #[default]
    Code,
    Database,
    Cloud,
    BarChart,
    Layers,
    GitBranch,
    Terminal,
}

impl ServiceIcon {
    /// Icon of the bundled service catalog entry with this id.
    pub fn for_service_id(id: &str) -> Self {
        match id {
            "web" => ServiceIcon::Globe,
            "android" => ServiceIcon::Smartphone,
            "ios" => ServiceIcon::Apple,
            "digital" => ServiceIcon::Megaphone,
            "seo" => ServiceIcon::Search,
            _ => ServiceIcon::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    /// RFC 3339 timestamp
    pub uploaded_at: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub resume_url: String,
}

/// Every editable collection plus the résumé reference.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub projects: Vec<Project>,
    pub work_experience: Vec<WorkExperience>,
    pub reviews: Vec<Review>,
    pub services: Vec<Service>,
    pub resume_url: String,
    pub media: Vec<MediaItem>,
}

impl SiteContent {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn experience(&self, id: &str) -> Option<&WorkExperience> {
        self.work_experience.iter().find(|e| e.id == id)
    }

    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn media_item(&self, id: &str) -> Option<&MediaItem> {
        self.media.iter().find(|m| m.id == id)
    }

    /// What the public site may show: published projects and enabled services.
    pub fn public_view(&self) -> SiteContent {
        SiteContent {
            projects: self
                .projects
                .iter()
                .filter(|p| p.is_published)
                .cloned()
                .collect(),
            services: self.services.iter().filter(|s| s.enabled).cloned().collect(),
            media: Vec::new(),
            ..self.clone()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Drafts (records before an identifier is assigned)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

impl ProjectDraft {
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack,
            status: self.status,
            tasks: self.tasks,
            deadline: self.deadline,
            image: self.image,
            live_link: self.live_link,
            github_link: self.github_link,
            is_published: self.is_published,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceDraft {
    pub company: String,
    pub role: String,
    pub duration: String,
    #[serde(default)]
    pub contributions: Vec<String>,
    /// Appended after the current entries when absent.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl WorkExperienceDraft {
    pub fn into_experience(self, id: String, fallback_sort_order: i32) -> WorkExperience {
        WorkExperience {
            id,
            company: self.company,
            role: self.role,
            duration: self.duration,
            contributions: self.contributions,
            sort_order: self.sort_order.unwrap_or(fallback_sort_order),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub client_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub image: Option<String>,
    pub review_text: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
}

fn default_rating() -> i32 {
    MAX_RATING
}

impl ReviewDraft {
    pub fn into_review(self, id: String) -> Review {
        Review {
            id,
            client_name: self.client_name,
            company: self.company,
            image: self.image,
            review_text: self.review_text,
            rating: self.rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaDraft {
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
    /// Defaults to the time of insertion.
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

impl MediaDraft {
    pub fn into_media_item(self, id: String, now: String) -> MediaItem {
        MediaItem {
            id,
            name: self.name,
            url: self.url,
            mime_type: self.mime_type,
            size: self.size,
            uploaded_at: self.uploaded_at.unwrap_or(now),
        }
    }
}
