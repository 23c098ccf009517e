pub mod point;

pub use point::{decode_share, parse_radix, Base, DecodeError, RawShare, Share, ShareValue};
