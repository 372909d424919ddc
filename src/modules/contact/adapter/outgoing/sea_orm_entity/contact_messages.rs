use sea_orm::entity::prelude::*;

use crate::contact::application::domain::entities::ContactMessage;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub project_type: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub is_read: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> ContactMessage {
        ContactMessage {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            project_type: self.project_type.clone(),
            message: self.message.clone(),
            is_read: self.is_read,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
