pub mod codec;
pub mod diff;
