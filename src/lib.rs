#![forbid(unsafe_code)]

pub mod cli;
pub mod difficulty;
pub mod formats;
pub mod logging;
pub mod pdf;
pub mod rating;
pub mod read_time;
pub mod scan;
pub mod seed;
pub mod signature;
pub mod title;
