use sea_orm::DbErr;
use uuid::Uuid;

use crate::modules::content::application::ports::outgoing::ContentRepositoryError;

/// Row ids are UUIDs. Anything else cannot match a row.
pub(super) fn parse_row_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

pub(super) fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(e.to_string())
}

pub(super) fn to_json<T: serde::Serialize>(
    data: &T,
) -> Result<serde_json::Value, ContentRepositoryError> {
    serde_json::to_value(data).map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}

pub(super) fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ContentRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ContentRepositoryError::SerializationError(e.to_string()))
}
