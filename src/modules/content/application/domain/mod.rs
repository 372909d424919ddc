pub mod defaults;
pub mod entities;
pub mod image_list;
pub mod patch;
pub mod snapshot;
