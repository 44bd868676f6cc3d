// Service exports
pub mod geolocation;

pub use geolocation::QueryPosition;
