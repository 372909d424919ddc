use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::row_support::{from_json, map_db_err, parse_row_id, to_json};
use crate::modules::content::adapter::outgoing::sea_orm_entity::work_experience::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::entities::{
    WorkExperience, WorkExperienceDraft,
};
use crate::modules::content::application::domain::patch::{PatchField, WorkExperiencePatch};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, ExperienceRepository,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list_experience(&self) -> Result<Vec<WorkExperience>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_experience).collect()
    }

    async fn insert_experience(
        &self,
        data: WorkExperienceDraft,
    ) -> Result<WorkExperience, ContentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(data.company),
            role: Set(data.role),
            duration: Set(data.duration),
            contributions: Set(to_json(&data.contributions)?),
            sort_order: Set(data.sort_order.unwrap_or(0)),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_experience(result)
    }

    async fn patch_experience(
        &self,
        id: &str,
        data: WorkExperiencePatch,
    ) -> Result<(), ContentRepositoryError> {
        let experience_id = parse_row_id(id).ok_or(ContentRepositoryError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(company) = data.company {
            model.company = Set(company);
        }
        if let PatchField::Value(role) = data.role {
            model.role = Set(role);
        }
        if let PatchField::Value(duration) = data.duration {
            model.duration = Set(duration);
        }
        if let PatchField::Value(contributions) = data.contributions {
            model.contributions = Set(to_json(&contributions)?);
        }
        if let PatchField::Value(sort_order) = data.sort_order {
            model.sort_order = Set(sort_order);
        }

        let has_changes = model.company.is_set()
            || model.role.is_set()
            || model.duration.is_set()
            || model.contributions.is_set()
            || model.sort_order.is_set();

        if !has_changes {
            Entity::find_by_id(experience_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ContentRepositoryError::NotFound)?;

            return Ok(());
        }

        let res = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(experience_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_experience(&self, id: &str) -> Result<(), ContentRepositoryError> {
        let Some(experience_id) = parse_row_id(id) else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(experience_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_experience(
    model: work_experience::Model,
) -> Result<WorkExperience, ContentRepositoryError> {
    Ok(WorkExperience {
        id: model.id.to_string(),
        company: model.company,
        role: model.role,
        duration: model.duration,
        contributions: from_json(&model.contributions)?,
        sort_order: model.sort_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};
    use serde_json::json;

    fn create_mock_model(id: Uuid, sort_order: i32) -> work_experience::Model {
        work_experience::Model {
            id,
            company: "TechCorp Global".to_string(),
            role: "Senior Full-Stack Developer".to_string(),
            duration: "2021 – Present".to_string(),
            contributions: json!(["Led a team"]),
            sort_order,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_experience_keeps_query_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                create_mock_model(first, 0),
                create_mock_model(second, 1),
            ]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let items = repo.list_experience().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, first.to_string());
        assert_eq!(items[1].sort_order, 1);
        assert_eq!(items[0].contributions, vec!["Led a team".to_string()]);
    }

    #[tokio::test]
    async fn test_insert_experience_returns_row() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_model(id, 3)]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .insert_experience(WorkExperienceDraft {
                company: "TechCorp Global".to_string(),
                role: "Senior Full-Stack Developer".to_string(),
                duration: "2021 – Present".to_string(),
                contributions: vec!["Led a team".to_string()],
                sort_order: Some(3),
            })
            .await
            .unwrap();

        assert_eq!(result.id, id.to_string());
        assert_eq!(result.sort_order, 3);
    }

    #[tokio::test]
    async fn test_insert_experience_binds_contributions_as_jsonb() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![create_mock_model(Uuid::new_v4(), 0)]])
                .into_connection(),
        );

        let repo = ExperienceRepositoryPostgres::new(Arc::clone(&db));
        repo.insert_experience(WorkExperienceDraft {
            company: "TechCorp Global".to_string(),
            role: "Senior Full-Stack Developer".to_string(),
            duration: "2021 – Present".to_string(),
            contributions: vec!["Led a team".to_string(), "Shipped v2".to_string()],
            sort_order: None,
        })
        .await
        .unwrap();
        drop(repo);

        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        let values = &log[0].statements()[0].values.as_ref().unwrap().0;

        assert!(values.iter().any(|v| matches!(
            v,
            Value::Json(Some(j)) if **j == json!(["Led a team", "Shipped v2"])
        )));
    }

    #[tokio::test]
    async fn test_list_experience_rejects_non_array_contributions() {
        let mut model = create_mock_model(Uuid::new_v4(), 0);
        model.contributions = json!({ "text": "Led a team" });

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.list_experience().await,
            Err(ContentRepositoryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_experience_no_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch_experience(
                &Uuid::new_v4().to_string(),
                WorkExperiencePatch {
                    role: PatchField::Value("Lead".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(ContentRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_patch_experience_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("deadlock".to_string())])
            .into_connection();

        let repo = ExperienceRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch_experience(
                &Uuid::new_v4().to_string(),
                WorkExperiencePatch {
                    sort_order: PatchField::Value(0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ContentRepositoryError::DatabaseError(_))));
    }
}
