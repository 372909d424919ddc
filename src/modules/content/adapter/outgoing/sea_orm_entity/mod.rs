pub mod media;
pub mod projects;
pub mod reviews;
pub mod site_settings;
pub mod work_experience;
