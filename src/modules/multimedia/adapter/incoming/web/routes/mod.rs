mod delete_file;
mod upload_file;

pub use delete_file::{__path_delete_file_handler, delete_file_handler, DeleteFileRequest};
pub use upload_file::{
    __path_upload_file_handler, upload_file_handler, UploadFileQuery, UploadFileResponse,
};
