use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::row_support::{map_db_err, parse_row_id};
use crate::modules::content::adapter::outgoing::sea_orm_entity::reviews::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::content::application::domain::entities::{Review, ReviewDraft};
use crate::modules::content::application::domain::patch::{PatchField, ReviewPatch};
use crate::modules::content::application::ports::outgoing::{
    ContentRepositoryError, ReviewRepository,
};

#[derive(Clone)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn list_reviews(&self) -> Result<Vec<Review>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_review).collect())
    }

    async fn insert_review(&self, data: ReviewDraft) -> Result<Review, ContentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            client_name: Set(data.client_name),
            company: Set(data.company),
            image: Set(data.image),
            review_text: Set(data.review_text),
            rating: Set(data.rating),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_review(result))
    }

    async fn patch_review(&self, id: &str, data: ReviewPatch) -> Result<(), ContentRepositoryError> {
        let review_id = parse_row_id(id).ok_or(ContentRepositoryError::NotFound)?;

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(client_name) = data.client_name {
            model.client_name = Set(client_name);
        }
        if let PatchField::Value(company) = data.company {
            model.company = Set(company);
        }
        match data.image {
            PatchField::Unset => {}
            PatchField::Null => model.image = Set(None),
            PatchField::Value(url) => model.image = Set(Some(url)),
        }
        if let PatchField::Value(text) = data.review_text {
            model.review_text = Set(text);
        }
        if let PatchField::Value(rating) = data.rating {
            model.rating = Set(rating);
        }

        let has_changes = model.client_name.is_set()
            || model.company.is_set()
            || model.image.is_set()
            || model.review_text.is_set()
            || model.rating.is_set();

        if !has_changes {
            Entity::find_by_id(review_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ContentRepositoryError::NotFound)?;

            return Ok(());
        }

        let res = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(review_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_review(&self, id: &str) -> Result<(), ContentRepositoryError> {
        let Some(review_id) = parse_row_id(id) else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(review_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_review(model: reviews::Model) -> Review {
    Review {
        id: model.id.to_string(),
        client_name: model.client_name,
        company: model.company,
        image: model.image,
        review_text: model.review_text,
        rating: model.rating,
    }
}
