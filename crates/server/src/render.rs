//! 目录页面渲染。

use maud::{DOCTYPE, Markup, PreEscaped, html};
use webfs_capabilities::{DirectoryView, Entry};

const STYLE: &str = r#"
body{font-family:ui-sans-serif,system-ui,sans-serif;margin:0;background:#0f172a;color:#e5e7eb}
.container{max-width:1100px;margin:0 auto;padding:24px}
a{color:#93c5fd;text-decoration:none}
a:hover{text-decoration:underline}
header{display:flex;gap:16px;align-items:center;flex-wrap:wrap;margin-bottom:16px}
header h1{font-size:1.1rem;margin:0;word-break:break-all}
.actions{display:flex;gap:8px;margin-left:auto}
button{cursor:pointer;background:#1e293b;color:#e5e7eb;border:1px solid #334155;border-radius:6px;padding:4px 10px}
table{width:100%;border-collapse:collapse}
th,td{text-align:left;padding:6px 10px;border-bottom:1px solid #1f2937}
td.mono{font-family:ui-monospace,monospace;white-space:nowrap}
"#;

const SCRIPT: &str = r#"
const currentPath = document.body.dataset.path;
async function post(url, body) {
  const res = await fetch(url, {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify(body),
  });
  if (!res.ok) {
    alert(await res.text());
    return;
  }
  location.reload();
}
function createFolder() {
  const name = prompt('Folder name');
  if (name) post('/create/folder', {path: currentPath, name});
}
function createFile() {
  const name = prompt('File name');
  if (name) post('/create/file', {path: currentPath, name});
}
function renameEntry(name) {
  const newName = prompt('New name', name);
  if (newName && newName !== name) post('/rename', {path: currentPath, name, newName});
}
function deleteEntry(name) {
  if (confirm('Delete ' + name + '?')) post('/delete', {path: currentPath, name});
}
"#;

/// 将目录视图渲染为完整的 HTML 页面。
pub fn render_directory(view: &DirectoryView) -> String {
    page(view).into_string()
}

fn page(view: &DirectoryView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (view.path) }
                style { (PreEscaped(STYLE)) }
            }
            body data-path=(view.path) {
                div class="container" {
                    header {
                        a href="/" { "Home" }
                        @if view.is_root {
                            a class="prev" href=(encode_path(&view.prev)) { ".." }
                        }
                        h1 { (view.path) }
                        div class="actions" {
                            button onclick="createFolder()" { "New folder" }
                            button onclick="createFile()" { "New file" }
                        }
                    }
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Size" }
                                th { "Mode" }
                                th { "Modified" }
                                th {}
                            }
                        }
                        tbody {
                            @for entry in &view.entries {
                                (entry_row(entry))
                            }
                        }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn entry_row(entry: &Entry) -> Markup {
    // 名称经过 JSON 编码后放进 onclick，避免引号破坏脚本
    let js_name = serde_json::to_string(&entry.name).unwrap_or_default();
    html! {
        tr {
            td {
                a href=(encode_path(&entry.path)) {
                    @if entry.is_dir { "📁 " } @else { "📄 " }
                    (entry.name)
                }
            }
            td class="mono" {
                @if !entry.is_dir { (entry.size) }
            }
            td class="mono" { (entry.mode_string()) }
            td class="mono" { (entry.mod_time) }
            td {
                button onclick=(format!("renameEntry({js_name})")) { "Rename" }
                " "
                button onclick=(format!("deleteEntry({js_name})")) { "Delete" }
            }
        }
    }
}

/// 按 `/` 分段做百分号编码，保留分隔符。
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}
