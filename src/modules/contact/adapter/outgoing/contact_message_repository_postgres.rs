use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::contact_messages::{ActiveModel, Column, Entity};
use crate::contact::application::{
    domain::entities::{ContactMessage, NewContactMessage},
    ports::outgoing::{ContactMessageRepository, ContactMessageRepositoryError},
};

fn map_db_err(e: DbErr) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::DatabaseError(e.to_string())
}

#[derive(Clone)]
pub struct ContactMessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactMessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for ContactMessageRepositoryPostgres {
    async fn insert_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            project_type: Set(data.project_type),
            message: Set(data.message),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(result.to_domain())
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        let res = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContactMessageRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::adapter::outgoing::sea_orm_entity::contact_messages;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_mock_model(id: Uuid, is_read: bool) -> contact_messages::Model {
        contact_messages::Model {
            id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            project_type: "Web Application".to_string(),
            message: "Hello".to_string(),
            is_read,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_insert_message_returns_row() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_model(id, false)]])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));
        let stored = repo
            .insert_message(NewContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                project_type: "Web Application".to_string(),
                message: "Hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(stored.id, id);
        assert!(!stored.is_read);
    }

    #[tokio::test]
    async fn test_list_messages_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                create_mock_model(Uuid::new_v4(), true),
                create_mock_model(Uuid::new_v4(), false),
            ]])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));
        let messages = repo.list_messages().await.unwrap();

        assert_eq!(messages.len(), 2);
        assert!(messages[0].is_read);
        assert_eq!(messages[1].project_type, "Web Application");
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ContactMessageRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.mark_read(Uuid::new_v4()).await,
            Err(ContactMessageRepositoryError::NotFound)
        );
    }
}
