pub(crate) mod config;
pub(crate) mod cyclotomic;
pub(crate) mod error;
mod extensions;
pub(crate) mod fp;
pub(crate) mod fp12;
pub(crate) mod fp2;
pub(crate) mod fp6;
pub(crate) mod utils;
