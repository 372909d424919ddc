use std::sync::Arc;

use crate::multimedia::application::ports::incoming::use_cases::{
    DeleteMediaFileUseCase, UploadMediaUseCase,
};

#[derive(Clone)]
pub struct MultimediaUseCases {
    pub upload: Arc<dyn UploadMediaUseCase + Send + Sync>,
    pub delete_file: Arc<dyn DeleteMediaFileUseCase + Send + Sync>,
}
