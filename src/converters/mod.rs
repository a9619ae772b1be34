pub mod base;
pub mod building;
pub mod zone;

pub use base::BaseConverter;
pub use building::{BuildingConverter, DEFAULT_BUILDING_NAME, DEFAULT_CITY, PLACEHOLDER_SITE};
pub use zone::ZoneConverter;
