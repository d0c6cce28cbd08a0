pub mod encoding;

pub(crate) mod depth;

pub use encoding::SegmentEncoding;
