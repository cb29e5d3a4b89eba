//! Input sources for the estimator: image-based area detection, image
//! uploads and CSV room lists.

pub mod error;
pub mod image_area;
pub mod rooms;
pub mod upload;

pub use error::ImageAreaError;
pub use image_area::{INTENSITY_THRESHOLD, PIXELS_PER_SQFT, detect_area, detect_area_from_path};
pub use rooms::{Room, RoomEstimate, RoomLoadError, estimate_rooms, total_estimate};
pub use upload::{ACCEPTED_EXTENSIONS, ImageUpload};
