mod blob_storage_http;

pub use blob_storage_http::HttpBlobStorage;
