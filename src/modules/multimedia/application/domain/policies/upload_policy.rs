use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Invalid bucket name: {0}")]
    InvalidBucket(String),

    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    #[error("Empty file")]
    EmptyFile,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    /// Sent as `cache-control` with every upload.
    pub cache_control_seconds: u32,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024, // 10MB
            max_file_name_len: 255,
            cache_control_seconds: 3600,
        }
    }
}

const RANDOM_SUFFIX_LEN: usize = 10;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

impl UploadPolicy {
    pub fn validate_bucket(&self, bucket: &str) -> Result<(), UploadPolicyError> {
        if is_safe_segment(bucket) {
            Ok(())
        } else {
            Err(UploadPolicyError::InvalidBucket(bucket.to_string()))
        }
    }

    /// `None` for an absent or blank folder, otherwise the folder without
    /// surrounding slashes.
    pub fn normalize_folder(&self, folder: Option<&str>) -> Result<Option<String>, UploadPolicyError> {
        let folder = match folder.map(|f| f.trim().trim_matches('/')) {
            None | Some("") => return Ok(None),
            Some(f) => f,
        };

        if folder.split('/').all(is_safe_segment) {
            Ok(Some(folder.to_string()))
        } else {
            Err(UploadPolicyError::InvalidFolder(folder.to_string()))
        }
    }

    pub fn validate_size(&self, size: u64) -> Result<(), UploadPolicyError> {
        if size == 0 {
            return Err(UploadPolicyError::EmptyFile);
        }
        if size > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: size,
            });
        }
        Ok(())
    }

    /// Text after the last `.`, or the whole name when there is none.
    pub fn extension<'a>(&self, file_name: &'a str) -> Result<&'a str, UploadPolicyError> {
        let base = Path::new(file_name)
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or(UploadPolicyError::InvalidFileName)?;

        if base != file_name || base.len() > self.max_file_name_len {
            return Err(UploadPolicyError::InvalidFileName);
        }

        let ext = base.rsplit('.').next().unwrap_or(base);
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UploadPolicyError::InvalidFileName);
        }

        Ok(ext)
    }

    /// `{folder/}{unix-millis}-{random base36}.{ext}`
    pub fn object_name(
        &self,
        folder: Option<&str>,
        file_name: &str,
        unix_millis: i64,
    ) -> Result<String, UploadPolicyError> {
        let folder = self.normalize_folder(folder)?;
        let ext = self.extension(file_name)?;
        let prefix = folder.map(|f| format!("{f}/")).unwrap_or_default();

        Ok(format!("{prefix}{unix_millis}-{}.{ext}", random_suffix()))
    }
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..RANDOM_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Object path of a public URL inside `bucket`, if it points there.
pub fn object_path_from_public_url(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/storage/v1/object/public/{bucket}/");
    let (_, path) = url.split_once(&marker)?;
    let path = path.split(['?', '#']).next().unwrap_or_default();

    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
