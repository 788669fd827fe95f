pub mod api;
pub mod date_utils;
pub mod host_context;
pub mod logging;
pub mod storage;
