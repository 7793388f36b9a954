//! webfs：本地 Web 文件浏览器。

pub mod api;
pub mod config;
pub mod render;
