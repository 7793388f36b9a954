//! 列表展示用的格式化函数。

use std::time::SystemTime;

use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// 将字节数格式化为 `"<值> <单位>"`。
///
/// 以 1000 为进制，选择使数值不超过 999 的最大单位（最大到 GB），
/// 向上取整到两位小数后按一位小数输出。不足 1 KB 的文件显示为 `0.0 KB`。
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64 / 1000.0;
    let mut unit = 0;
    while size > 999.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1000.0;
        unit += 1;
    }
    let size = (size * 100.0).ceil() / 100.0;
    format!("{size:.1} {}", SIZE_UNITS[unit])
}

/// 按 `DD Mon YYYY HH:MM` 格式输出本地时间。
pub fn format_mod_time(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%d %b %Y %H:%M").to_string()
}

const S_IFMT: u32 = 0o170000;
const S_IFDIR: u32 = 0o040000;
const S_IFLNK: u32 = 0o120000;
const S_IFIFO: u32 = 0o010000;
const S_IFSOCK: u32 = 0o140000;
const S_IFBLK: u32 = 0o060000;
const S_IFCHR: u32 = 0o020000;

/// 原始 `st_mode` 的符号表示，如 `drwxr-xr-x`、`dtrwxrwxrwx`、`Lrwxrwxrwx`。
///
/// 类型与特殊位标记依次为 `d L D p S u g c t`，没有任何标记时为 `-`，
/// 之后是三组 `rwx`。
pub fn mode_string(mode: u32) -> String {
    let file_type = mode & S_IFMT;
    let mut out = String::with_capacity(12);
    let flags = [
        ('d', file_type == S_IFDIR),
        ('L', file_type == S_IFLNK),
        ('D', file_type == S_IFBLK || file_type == S_IFCHR),
        ('p', file_type == S_IFIFO),
        ('S', file_type == S_IFSOCK),
        ('u', mode & 0o4000 != 0),
        ('g', mode & 0o2000 != 0),
        ('c', file_type == S_IFCHR),
        ('t', mode & 0o1000 != 0),
    ];
    for (marker, set) in flags {
        if set {
            out.push(marker);
        }
    }
    if out.is_empty() {
        out.push('-');
    }

    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_kilobyte_sizes_show_as_kb() {
        assert_eq!(format_size(0), "0.0 KB");
        assert_eq!(format_size(10), "0.0 KB");
    }

    #[test]
    fn test_kilobyte_range() {
        assert_eq!(format_size(500_000), "500.0 KB");
        assert_eq!(format_size(999_000), "999.0 KB");
    }

    #[test]
    fn test_unit_steps_up_above_999() {
        // 999.5 KB 超过阈值，换算成 MB 后向上取整
        assert_eq!(format_size(999_500), "1.0 MB");
        assert_eq!(format_size(250_000_000), "250.0 MB");
        assert_eq!(format_size(3_000_000_000), "3.0 GB");
    }

    #[test]
    fn test_gigabytes_is_the_largest_unit() {
        assert_eq!(format_size(5_000_000_000_000), "5000.0 GB");
    }

    #[test]
    fn test_mod_time_layout() {
        let formatted = format_mod_time(SystemTime::now());
        let parts: Vec<&str> = formatted.split(' ').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 4);
        assert_eq!(parts[3].len(), 5);
    }

    #[test]
    fn test_mode_string() {
        assert_eq!(mode_string(0o040755), "drwxr-xr-x");
        assert_eq!(mode_string(0o100644), "-rw-r--r--");
        assert_eq!(mode_string(0o100000), "----------");
    }

    #[test]
    fn test_mode_string_special_bits() {
        // /tmp
        assert_eq!(mode_string(0o041777), "dtrwxrwxrwx");
        assert_eq!(mode_string(0o120777), "Lrwxrwxrwx");
        assert_eq!(mode_string(0o104755), "urwxr-xr-x");
        assert_eq!(mode_string(0o102755), "grwxr-xr-x");
        assert_eq!(mode_string(0o020666), "Dcrw-rw-rw-");
        assert_eq!(mode_string(0o060660), "Drw-rw----");
        assert_eq!(mode_string(0o010644), "prw-r--r--");
        assert_eq!(mode_string(0o140755), "Srwxr-xr-x");
    }
}
