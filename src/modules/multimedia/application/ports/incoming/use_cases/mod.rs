mod delete_media_file;
mod upload_media;

pub use delete_media_file::DeleteMediaFileUseCase;
pub use upload_media::{UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia};
