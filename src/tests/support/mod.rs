pub mod app_state_builder;
pub mod auth_helper;
pub mod content_fixtures;
pub mod rejecting_content_store;
