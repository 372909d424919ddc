pub mod domain;
pub mod media_use_cases;
pub mod ports;

pub use media_use_cases::MultimediaUseCases;
