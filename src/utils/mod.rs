// Utils compartidos

pub mod constants;
pub mod storage;
pub mod format;
pub mod browser;

pub use constants::*;
pub use format::*;
