pub mod cloud_storage;

pub use cloud_storage::HttpBlobStorage;
