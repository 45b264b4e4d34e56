//! Unit and label conversion for single weather observations
//!
//! Pure functions only: raw provider attributes (wind in m/s, direction in degrees, provider
//! weather codes) in, display-ready values out. Nothing here allocates state or performs I/O.
//! - units: speed and temperature conversions
//! - codes: weather code categories, labels and icon identifiers
//! - compass: 8-point and 16-point wind direction labels
//! - beaufort: wind force on the Beaufort scale

pub mod beaufort;
pub mod codes;
pub mod compass;
pub mod units;

pub use beaufort::{beaufort_force, beaufort_name};
pub use codes::{
    DEFAULT_ICON_ID, FALLBACK_LABEL, WeatherCategory, icon_id_for_code, icon_url, is_icon_token,
    label_for_code, resolve_icon_id,
};
pub use compass::{direction_label_coarse, direction_label_fine, normalize_degrees};
pub use units::{celsius_to_fahrenheit, precipitation_percent, to_kmh};
