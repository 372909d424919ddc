mod delete_media_file_service;
mod upload_media_service;

pub use delete_media_file_service::DeleteMediaFileService;
pub use upload_media_service::UploadMediaService;
