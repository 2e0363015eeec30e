#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod color_565;
pub mod color_rgba32;
pub mod convert;
pub mod error;

pub use convert::batch::{convert_bytes, convert_slice, convert_slice_with};
pub use convert::{rgba32_to_rgb565, ConvertStrategy};
pub use error::ConvertError;
