use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::row_support::{map_db_err, parse_row_id};
use crate::modules::content::adapter::outgoing::sea_orm_entity::media::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::entities::{MediaDraft, MediaItem};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, MediaRepository,
};

#[derive(Clone)]
pub struct MediaRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaRepository for MediaRepositoryPostgres {
    async fn list_media(&self) -> Result<Vec<MediaItem>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::UploadedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_media_item).collect()
    }

    async fn insert_media(&self, data: MediaDraft) -> Result<MediaItem, ContentRepositoryError> {
        let uploaded_at = match data.uploaded_at.as_deref() {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))?,
            None => Utc::now().fixed_offset(),
        };
        let size = i64::try_from(data.size)
            .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            url: Set(data.url),
            mime_type: Set(data.mime_type),
            size: Set(size),
            uploaded_at: Set(uploaded_at),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_media_item(result)
    }

    async fn delete_media(&self, id: &str) -> Result<(), ContentRepositoryError> {
        let Some(media_id) = parse_row_id(id) else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(media_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_media_item(model: media::Model) -> Result<MediaItem, ContentRepositoryError> {
    let size = u64::try_from(model.size)
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))?;

    Ok(MediaItem {
        id: model.id.to_string(),
        name: model.name,
        url: model.url,
        mime_type: model.mime_type,
        size,
        uploaded_at: model.uploaded_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    })
}
