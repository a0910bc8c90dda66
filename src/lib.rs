pub mod catalog;
pub mod constants;
pub mod conversion;
pub mod env_state;
pub mod geocode;
pub mod optics;
pub mod sidereal;
pub mod skywatch;
pub mod skywatch_errors;
pub mod targets;
pub mod visibility;
