//! URL 风格路径的拼接与拆分。
//!
//! 浏览器请求的路径直接作为文件系统路径使用，这里只做 `/` 分隔的字符串处理，
//! 不做规范化。

use crate::filesystem::{FileSystemError, Result};

/// 父目录路径：去掉最后一个 `/` 分段。根目录 `/` 的父路径为空串。
pub fn parent_path(path: &str) -> String {
    if path == "/" {
        return String::new();
    }
    let parent = path.rfind('/').map(|idx| &path[..idx]).unwrap_or("");
    if parent.is_empty() {
        "/".to_string()
    } else {
        parent.to_string()
    }
}

/// 是否显示返回上级的入口：根目录及其直接子目录为 `false`。
pub fn is_root_flag(path: &str, prev: &str) -> bool {
    path != "/" && prev != "/"
}

/// 子条目的完整路径。
pub fn child_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// 路径最后一个分段，用作下载文件名。
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// 校验条目名称，防止 `<path>/<name>` 退化为父目录或其他目录。
pub fn validate_name(name: &str) -> Result<&str> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR)
    {
        return Err(FileSystemError::InvalidName(name.to_string()));
    }
    Ok(name)
}
