//! webfs 的文件系统能力封装。
//!
//! server 将这些能力暴露为 HTTP 路由：目录浏览、文件读取以及
//! 创建、重命名、删除。

pub mod filesystem;
pub mod format;
pub mod path;

pub use filesystem::{
    ContentKind, DEFAULT_DENYLIST, DirectoryView, Entry, FileContent, FileSystemCapabilities,
    FileSystemError, NEW_FILE_MODE, Resource,
};
