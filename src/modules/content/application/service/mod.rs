mod local_content_store;
mod remote_content_store;

pub use local_content_store::LocalContentStore;
pub use remote_content_store::RemoteContentStore;
