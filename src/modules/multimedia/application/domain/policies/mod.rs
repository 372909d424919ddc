pub mod upload_policy;

pub use upload_policy::{object_path_from_public_url, UploadPolicy, UploadPolicyError};
