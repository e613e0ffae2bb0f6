//! RPC method handler for the TabDesk JSON-lines protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdin.
//! Every mutating method re-reads the affected collection and returns it, so
//! the client always renders the store as it is after the write.

use std::sync::Mutex;

use rusqlite::Connection;
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::folder_manager::{FolderManager, FolderManagerTrait};
use crate::managers::link_manager::{LinkManager, LinkManagerTrait};
use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::services::{favicon, sidebar, transfer};
use crate::types::errors::DashboardError;
use crate::types::link::LinkPatch;
use crate::types::shortcut::ShortcutPatch;
use crate::types::snapshot::Snapshot;

fn str_param<'p>(params: &'p Value, key: &str) -> Result<&'p str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn opt_str_param<'p>(params: &'p Value, key: &str) -> Option<&'p str> {
    params.get(key).and_then(|v| v.as_str())
}

/// Reads the icon of a shortcut request.
///
/// `image_base64` + `image_mime` (an uploaded picture) wins over `favicon`.
/// An explicit `"favicon": null` means "remove the icon".
fn icon_param(params: &Value) -> Result<Option<Option<String>>, String> {
    if let Some(encoded) = opt_str_param(params, "image_base64") {
        let mime = opt_str_param(params, "image_mime").unwrap_or("image/png");
        let bytes = favicon::decode_image(encoded).map_err(err)?;
        let data_url = favicon::embed_image(mime, &bytes).map_err(err)?;
        return Ok(Some(Some(data_url)));
    }
    match params.get("favicon") {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) => Ok(Some(Some(s.clone()))),
        Some(_) => Err("invalid favicon: expected string or null".to_string()),
    }
}

fn err(e: DashboardError) -> String {
    e.to_string()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

fn sidebar_json(conn: &Connection) -> Result<Value, String> {
    to_json(&sidebar::load_sidebar(conn).map_err(err)?)
}

fn shortcuts_json(conn: &Connection) -> Result<Value, String> {
    to_json(&ShortcutManager::new(conn).get_all().map_err(err)?)
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Failures are logged here and never abort the caller.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    let result = dispatch(app, method, params);
    if let Err(e) = &result {
        tracing::warn!(method, error = %e, "rpc method failed");
    }
    result
}

fn dispatch(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Sidebar ───
        "sidebar.load" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            sidebar_json(a.db.connection())
        }

        // ─── Folders ───
        "folder.create" => {
            let name = str_param(params, "name")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let folder = FolderManager::new(conn).create(name).map_err(err)?;
            Ok(json!({"folder": to_json(&folder)?, "sidebar": sidebar_json(conn)?}))
        }
        "folder.rename" => {
            let id = str_param(params, "id")?;
            let name = str_param(params, "name")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            FolderManager::new(conn).rename(id, name).map_err(err)?;
            sidebar_json(conn)
        }
        "folder.toggle" => {
            let id = str_param(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            FolderManager::new(conn).toggle(id).map_err(err)?;
            sidebar_json(conn)
        }
        "folder.delete" => {
            let id = str_param(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            FolderManager::new(conn).delete(id).map_err(err)?;
            sidebar_json(conn)
        }

        // ─── Links ───
        "link.list" => {
            let folder_id = str_param(params, "folder_id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let links = LinkManager::new(a.db.connection())
                .get_by_folder_id(folder_id)
                .map_err(err)?;
            to_json(&links)
        }
        "link.create" => {
            let folder_id = str_param(params, "folder_id")?;
            let name = str_param(params, "name")?;
            let url = str_param(params, "url")?;
            let icon = opt_str_param(params, "favicon");
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let link = LinkManager::new(conn)
                .create(folder_id, name, url, icon)
                .map_err(err)?;
            Ok(json!({"link": to_json(&link)?, "sidebar": sidebar_json(conn)?}))
        }
        "link.update" => {
            let id = str_param(params, "id")?;
            let patch = LinkPatch {
                name: opt_str_param(params, "name").map(str::to_string),
                url: opt_str_param(params, "url").map(str::to_string),
                favicon: icon_param(params)?,
            };
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            LinkManager::new(conn).update(id, patch).map_err(err)?;
            sidebar_json(conn)
        }
        "link.delete" => {
            let id = str_param(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            LinkManager::new(conn).delete(id).map_err(err)?;
            sidebar_json(conn)
        }

        // ─── Shortcuts ───
        "shortcut.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            shortcuts_json(a.db.connection())
        }
        "shortcut.create" => {
            let name = str_param(params, "name")?;
            let url = str_param(params, "url")?;
            let icon = icon_param(params)?.flatten();
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            let shortcut = ShortcutManager::new(conn)
                .create(name, url, icon.as_deref())
                .map_err(err)?;
            Ok(json!({"shortcut": to_json(&shortcut)?, "shortcuts": shortcuts_json(conn)?}))
        }
        "shortcut.update" => {
            let id = str_param(params, "id")?;
            let patch = ShortcutPatch {
                name: opt_str_param(params, "name").map(str::to_string),
                url: opt_str_param(params, "url").map(str::to_string),
                favicon: icon_param(params)?,
            };
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            ShortcutManager::new(conn).update(id, patch).map_err(err)?;
            shortcuts_json(conn)
        }
        "shortcut.delete" => {
            let id = str_param(params, "id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let conn = a.db.connection();
            ShortcutManager::new(conn).delete(id).map_err(err)?;
            shortcuts_json(conn)
        }

        // ─── Backup / restore ───
        "data.export" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(&transfer::export_data(a.db.connection()).map_err(err)?)
        }
        "data.import" => {
            let data = params.get("data").cloned().ok_or("missing data")?;
            let snapshot: Snapshot =
                serde_json::from_value(data).map_err(|e| format!("invalid snapshot: {}", e))?;
            let a = app.lock().map_err(|e| e.to_string())?;
            transfer::import_data(a.db.connection(), &snapshot).map_err(err)?;
            Ok(json!({"imported": to_json(&snapshot.counts())?}))
        }
        "data.clear" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            transfer::clear_all(a.db.connection()).map_err(err)?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
