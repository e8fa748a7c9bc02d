pub mod common;
pub mod config;
pub mod daily;
pub mod identify;
pub mod init;
pub mod intersect;
pub mod merge;
pub mod shifts;
