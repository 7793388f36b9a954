//! 文件系统能力模块。
//!
//! 提供目录浏览、文件读取以及创建、重命名、删除等操作。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::format::{format_mod_time, format_size, mode_string};
use crate::path::{child_path, file_name, is_root_flag, parent_path, validate_name};

/// 新建文件的权限位（rwxr-xr-x）。
pub const NEW_FILE_MODE: u32 = 0o755;

/// 默认禁止在浏览器中打开的路径片段（磁盘镜像）。
pub const DEFAULT_DENYLIST: [&str; 2] = [".dmg", ".iso"];

/// 文件系统错误类型。
#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("unsupported file to open in browser")]
    UnsupportedFile(String),

    #[error("name already exist")]
    NameExists(String),

    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("{0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FileSystemError>;

/// 目录中的一个条目。
#[derive(Debug, Clone)]
pub struct Entry {
    /// 名称。
    pub name: String,
    /// 完整路径。
    pub path: String,
    /// 可读的大小，如 `1.5 MB`。
    pub size: String,
    /// 原始权限位。
    pub mode: u32,
    /// 修改时间，`DD Mon YYYY HH:MM`。
    pub mod_time: String,
    /// 是否为目录。
    pub is_dir: bool,
}

impl Entry {
    /// 权限位的符号表示。
    pub fn mode_string(&self) -> String {
        mode_string(self.mode)
    }
}

/// 一次目录浏览请求的结果，每次请求重新构建。
#[derive(Debug, Clone)]
pub struct DirectoryView {
    /// 当前目录路径。
    pub path: String,
    /// 父目录路径，根目录为空串。
    pub prev: String,
    /// 是否显示返回上级的入口。
    pub is_root: bool,
    /// 按文件系统枚举顺序排列的条目。
    pub entries: Vec<Entry>,
}

/// 文件内容的展示方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// 以内联 PDF 展示。
    Pdf,
    /// 一律按纯文本返回。
    PlainText,
}

/// 读取到内存中的文件。
#[derive(Debug, Clone)]
pub struct FileContent {
    /// 路径的最后一段。
    pub file_name: String,
    pub kind: ContentKind,
    pub bytes: Vec<u8>,
}

/// 路径解析结果：目录或文件。
#[derive(Debug)]
pub enum Resource {
    Directory(DirectoryView),
    File(FileContent),
}

/// 文件系统能力接口。
#[derive(Debug, Clone)]
pub struct FileSystemCapabilities {
    /// 禁止内联打开的路径片段。
    denylist: Vec<String>,
}

impl FileSystemCapabilities {
    /// 使用默认禁止列表创建实例。
    pub fn new() -> Self {
        Self::with_denylist(DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect())
    }

    /// 创建带有自定义禁止列表的实例。
    pub fn with_denylist(denylist: Vec<String>) -> Self {
        Self { denylist }
    }

    /// 打开路径：优先按目录列出，失败时按文件读取。
    ///
    /// 文件也无法读取时返回目录读取的原始错误；命中禁止列表时返回
    /// [`FileSystemError::UnsupportedFile`]。
    pub fn open(&self, path: &str) -> Result<Resource> {
        let dir_err = match self.list_directory(path) {
            Ok(view) => return Ok(Resource::Directory(view)),
            Err(err) => err,
        };

        match self.read_file(path) {
            Ok(content) => Ok(Resource::File(content)),
            Err(err @ FileSystemError::UnsupportedFile(_)) => Err(err),
            Err(file_err) => {
                debug!(path = %path, error = %file_err, "path is neither a directory nor a readable file");
                Err(dir_err)
            }
        }
    }

    /// 列出目录内容。无法读取元数据的条目会被跳过。
    pub fn list_directory(&self, path: &str) -> Result<DirectoryView> {
        let read_dir = fs::read_dir(path)?;
        info!(path = %path, "Listing directory");

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(err) => {
                    debug!(path = %path, error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            match Self::entry_from(path, &dir_entry) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    debug!(
                        path = %path,
                        name = %dir_entry.file_name().to_string_lossy(),
                        error = %err,
                        "skipping entry without metadata"
                    );
                }
            }
        }

        let prev = parent_path(path);
        let is_root = is_root_flag(path, &prev);
        Ok(DirectoryView {
            path: path.to_string(),
            prev,
            is_root,
            entries,
        })
    }

    /// 将目录条目转换为展示结构。
    fn entry_from(dir: &str, dir_entry: &fs::DirEntry) -> io::Result<Entry> {
        let metadata = dir_entry.metadata()?;
        let name = dir_entry.file_name().to_string_lossy().to_string();
        let mod_time = metadata
            .modified()
            .map(format_mod_time)
            .unwrap_or_default();

        Ok(Entry {
            path: child_path(dir, &name),
            name,
            size: format_size(metadata.len()),
            mode: permission_bits(&metadata),
            mod_time,
            is_dir: metadata.is_dir(),
        })
    }

    /// 读取整个文件并判断展示方式。
    pub fn read_file(&self, path: &str) -> Result<FileContent> {
        if self.is_denied(path) {
            return Err(FileSystemError::UnsupportedFile(path.to_string()));
        }

        let bytes = fs::read(path)?;
        let kind = if path.to_ascii_lowercase().ends_with(".pdf") {
            ContentKind::Pdf
        } else {
            ContentKind::PlainText
        };
        info!(path = %path, size = bytes.len(), ?kind, "Serving file");

        Ok(FileContent {
            file_name: file_name(path).to_string(),
            kind,
            bytes,
        })
    }

    /// 路径是否命中禁止列表。
    pub fn is_denied(&self, path: &str) -> bool {
        self.denylist.iter().any(|pattern| path.contains(pattern.as_str()))
    }

    /// 创建目录 `<path>/<name>`（不递归创建父目录）。
    pub fn create_folder(&self, path: &str, name: &str) -> Result<PathBuf> {
        let target = target_path(path, name)?;
        fs::create_dir(&target)?;
        info!(path = %target.display(), "Created folder");
        Ok(target)
    }

    /// 创建空文件 `<path>/<name>` 并设置权限为 [`NEW_FILE_MODE`]。
    ///
    /// 已存在的文件会被截断为空。
    pub fn create_file(&self, path: &str, name: &str) -> Result<PathBuf> {
        let target = target_path(path, name)?;
        fs::File::create(&target)?;
        set_permission_bits(&target, NEW_FILE_MODE)?;
        info!(path = %target.display(), "Created file");
        Ok(target)
    }

    /// 重命名 `<path>/<name>` 为 `<path>/<new_name>`。
    ///
    /// 在目标目录中已存在同名条目时返回 [`FileSystemError::NameExists`]，
    /// 不改动文件系统。
    pub fn rename_entry(&self, path: &str, name: &str, new_name: &str) -> Result<PathBuf> {
        let source = target_path(path, name)?;
        let target = target_path(path, new_name)?;

        if fs::symlink_metadata(&target).is_ok() {
            return Err(FileSystemError::NameExists(new_name.to_string()));
        }

        fs::rename(&source, &target)?;
        info!(from = %source.display(), to = %target.display(), "Renamed entry");
        Ok(target)
    }

    /// 递归删除 `<path>/<name>`。条目不存在时视为成功。
    pub fn delete_entry(&self, path: &str, name: &str) -> Result<PathBuf> {
        let target = target_path(path, name)?;
        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %target.display(), "nothing to delete");
                return Ok(target);
            }
            Err(err) => return Err(err.into()),
        };
        if metadata.is_dir() {
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
        info!(path = %target.display(), "Deleted entry");
        Ok(target)
    }
}

/// 操作目标 `<path>/<name>`，与列表中的条目路径拼接方式一致。
pub fn target_path(path: &str, name: &str) -> Result<PathBuf> {
    Ok(PathBuf::from(child_path(path, validate_name(name)?)))
}

impl Default for FileSystemCapabilities {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    let (kind, base) = if metadata.is_dir() {
        (0o040000, 0o755)
    } else {
        (0o100000, 0o644)
    };
    if metadata.permissions().readonly() {
        kind | (base & !0o222)
    } else {
        kind | base
    }
}

#[cfg(unix)]
fn set_permission_bits(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_permission_bits(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
