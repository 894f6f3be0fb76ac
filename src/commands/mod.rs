pub mod auth;
pub mod mapping;
pub mod preset;
pub mod profile;
pub mod resource;
pub mod transform;
