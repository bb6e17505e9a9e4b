#![forbid(unsafe_code)]

pub mod bbox;
pub mod composite;
pub mod error;
pub mod normalize;

pub use bbox::{Bbox, alpha_bbox, trim_transparent_border};
pub use error::{FavsquareError, FavsquareResult};
pub use normalize::{BACKGROUND, PadGeometry, normalize, pad_geometry, squarify};
