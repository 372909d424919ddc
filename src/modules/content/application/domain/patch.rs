use serde::Deserialize;

use super::entities::{
    MediaItem, Project, ProjectStatus, Review, Service, ServiceIcon, Task, WorkExperience,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear (only for nullable fields)
// - Value(v): replace with v
//
// omitted field => Unset (because of #[serde(default)])
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Non-nullable target: `Null` is ignored.
    pub fn apply(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }

    /// Nullable target.
    pub fn apply_nullable(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub tech_stack: PatchField<Vec<String>>,
    #[serde(default)]
    pub status: PatchField<ProjectStatus>,
    #[serde(default)]
    pub tasks: PatchField<Vec<Task>>,
    #[serde(default)]
    pub deadline: PatchField<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub live_link: PatchField<String>,
    #[serde(default)]
    pub github_link: PatchField<String>,
    #[serde(default)]
    pub is_published: PatchField<bool>,
}

impl ProjectPatch {
    pub fn publish(is_published: bool) -> Self {
        Self {
            is_published: PatchField::Value(is_published),
            ..Default::default()
        }
    }

    pub fn apply_to(self, project: &mut Project) {
        self.title.apply(&mut project.title);
        self.description.apply(&mut project.description);
        self.tech_stack.apply(&mut project.tech_stack);
        self.status.apply(&mut project.status);
        self.tasks.apply(&mut project.tasks);
        self.deadline.apply_nullable(&mut project.deadline);
        self.image.apply(&mut project.image);
        self.live_link.apply_nullable(&mut project.live_link);
        self.github_link.apply_nullable(&mut project.github_link);
        self.is_published.apply(&mut project.is_published);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperiencePatch {
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub role: PatchField<String>,
    #[serde(default)]
    pub duration: PatchField<String>,
    #[serde(default)]
    pub contributions: PatchField<Vec<String>>,
    #[serde(default)]
    pub sort_order: PatchField<i32>,
}

impl WorkExperiencePatch {
    pub fn apply_to(self, experience: &mut WorkExperience) {
        self.company.apply(&mut experience.company);
        self.role.apply(&mut experience.role);
        self.duration.apply(&mut experience.duration);
        self.contributions.apply(&mut experience.contributions);
        self.sort_order.apply(&mut experience.sort_order);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(default)]
    pub client_name: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub image: PatchField<String>,
    #[serde(default)]
    pub review_text: PatchField<String>,
    #[serde(default)]
    pub rating: PatchField<i32>,
}

impl ReviewPatch {
    pub fn apply_to(self, review: &mut Review) {
        self.client_name.apply(&mut review.client_name);
        self.company.apply(&mut review.company);
        self.image.apply_nullable(&mut review.image);
        self.review_text.apply(&mut review.review_text);
        self.rating.apply(&mut review.rating);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub icon: PatchField<ServiceIcon>,
    #[serde(default)]
    pub enabled: PatchField<bool>,
}

impl ServicePatch {
    pub fn apply_to(self, service: &mut Service) {
        self.title.apply(&mut service.title);
        self.description.apply(&mut service.description);
        self.icon.apply(&mut service.icon);
        self.enabled.apply(&mut service.enabled);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub url: PatchField<String>,
    #[serde(default, rename = "type")]
    pub mime_type: PatchField<String>,
    #[serde(default)]
    pub size: PatchField<u64>,
    #[serde(default)]
    pub uploaded_at: PatchField<String>,
}

impl MediaPatch {
    pub fn apply_to(self, item: &mut MediaItem) {
        self.name.apply(&mut item.name);
        self.url.apply(&mut item.url);
        self.mime_type.apply(&mut item.mime_type);
        self.size.apply(&mut item.size);
        self.uploaded_at.apply(&mut item.uploaded_at);
    }
}
