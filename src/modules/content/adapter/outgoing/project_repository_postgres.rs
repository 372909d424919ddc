use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::row_support::{from_json, map_db_err, parse_row_id, to_json};
use crate::modules::content::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::entities::{
    Project, ProjectDraft, ProjectStatus,
};
use crate::modules::content::application::domain::image_list::{
    join_image_urls, split_image_urls,
};
use crate::modules::content::application::domain::patch::{PatchField, ProjectPatch};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, ProjectRepository,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list_projects(&self) -> Result<Vec<Project>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_project).collect()
    }

    async fn insert_project(&self, data: ProjectDraft) -> Result<Project, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            tech_stack: Set(to_json(&data.tech_stack)?),
            status: Set(data.status.as_str().to_string()),
            tasks: Set(to_json(&data.tasks)?),
            deadline: Set(data.deadline),
            image_urls: Set(to_json(&split_image_urls(&data.image))?),
            live_link: Set(data.live_link),
            github_link: Set(data.github_link),
            is_published: Set(data.is_published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn patch_project(
        &self,
        id: &str,
        data: ProjectPatch,
    ) -> Result<(), ContentRepositoryError> {
        let project_id = parse_row_id(id).ok_or(ContentRepositoryError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        if let PatchField::Value(tech) = data.tech_stack {
            model.tech_stack = Set(to_json(&tech)?);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        if let PatchField::Value(tasks) = data.tasks {
            model.tasks = Set(to_json(&tasks)?);
        }

        match data.deadline {
            PatchField::Unset => {}
            PatchField::Null => model.deadline = Set(None),
            PatchField::Value(deadline) => model.deadline = Set(Some(deadline)),
        }

        if let PatchField::Value(image) = data.image {
            model.image_urls = Set(to_json(&split_image_urls(&image))?);
        }

        match data.live_link {
            PatchField::Unset => {}
            PatchField::Null => model.live_link = Set(None),
            PatchField::Value(url) => model.live_link = Set(Some(url)),
        }

        match data.github_link {
            PatchField::Unset => {}
            PatchField::Null => model.github_link = Set(None),
            PatchField::Value(url) => model.github_link = Set(Some(url)),
        }

        if let PatchField::Value(published) = data.is_published {
            model.is_published = Set(published);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.tech_stack.is_set()
            || model.status.is_set()
            || model.tasks.is_set()
            || model.deadline.is_set()
            || model.image_urls.is_set()
            || model.live_link.is_set()
            || model.github_link.is_set()
            || model.is_published.is_set();

        if !has_changes {
            Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ContentRepositoryError::NotFound)?;

            return Ok(());
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let res = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<(), ContentRepositoryError> {
        let Some(project_id) = parse_row_id(id) else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ContentRepositoryError> {
    let status = model
        .status
        .parse::<ProjectStatus>()
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))?;

    let image_urls: Vec<String> = from_json(&model.image_urls)?;

    Ok(Project {
        id: model.id.to_string(),
        title: model.title,
        description: model.description,
        tech_stack: from_json(&model.tech_stack)?,
        status,
        tasks: from_json(&model.tasks)?,
        deadline: model.deadline,
        image: join_image_urls(&image_urls),
        live_link: model.live_link,
        github_link: model.github_link,
        is_published: model.is_published,
    })
}

// ============================================================================
// Tests
// ============================================================================
