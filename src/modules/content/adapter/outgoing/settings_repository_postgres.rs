use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use super::row_support::map_db_err;
use crate::modules::content::adapter::outgoing::sea_orm_entity::site_settings::{
    ActiveModel, Column, Entity, SETTINGS_ROW_ID,
};
use crate::modules::content::application::domain::defaults::DEFAULT_RESUME_URL;
use crate::modules::content::application::domain::entities::SiteSettings;
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, SettingsRepository,
};

#[derive(Clone)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn get_settings(&self) -> Result<SiteSettings, ContentRepositoryError> {
        let row = Entity::find_by_id(SETTINGS_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(SiteSettings {
            resume_url: row
                .map(|r| r.resume_url)
                .unwrap_or_else(|| DEFAULT_RESUME_URL.to_string()),
        })
    }

    /// Upserts the singleton row.
    async fn set_resume_url(&self, url: &str) -> Result<(), ContentRepositoryError> {
        let model = ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            resume_url: Set(url.to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::ResumeUrl, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
