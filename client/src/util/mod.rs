//! Browser glue shared by pages and components.

pub mod auth;
pub mod storage;
pub mod timer;
