/*
    Top-level
*/

mod log;
mod number;
mod ops;

pub mod ieee754;
pub use log::*;
pub use number::*;
pub use ops::*;
