//! RPC method handler for the Passforge JSON protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdin.
//! The `handle_method` function dispatches method calls to the services and
//! the history store held by the `App` struct.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::app::App;
use crate::managers::history_store::{now_millis, relative_age, HistoryStoreTrait};
use crate::services::batch_engine::BatchPolicy;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::text_tools::CharacterCounts;
use crate::services::{export, strength_estimator, templates, word_lists};
use crate::types::passphrase::WordListId;
use crate::types::policy::CharsetPolicy;
use crate::types::secret::{BatchItem, GeneratedSecret};

/// Overlays the keys of `params` that `defaults` also has onto `defaults`,
/// then deserializes the result. Unknown keys are ignored.
fn merged<T: Serialize + DeserializeOwned>(defaults: &T, params: &Value) -> Result<T, String> {
    let mut base = serde_json::to_value(defaults).map_err(|e| e.to_string())?;
    if let (Value::Object(target), Value::Object(overrides)) = (&mut base, params) {
        for (key, value) in overrides {
            if target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    serde_json::from_value(base).map_err(|e| format!("invalid params: {}", e))
}

/// Password policy from a `template` id, or the settings defaults overlaid
/// with the request fields.
fn charset_policy(defaults: &CharsetPolicy, params: &Value) -> Result<CharsetPolicy, String> {
    match params.get("template").and_then(|v| v.as_str()) {
        Some(id) => templates::find(id)
            .ok_or_else(|| format!("unknown template: {}", id))?
            .policy()
            .map_err(|e| e.to_string()),
        None => merged(defaults, params),
    }
}

fn secret_json(secret: &GeneratedSecret) -> Value {
    json!({
        "value": secret.as_str(),
        "length": secret.length,
        "strength": strength_estimator::analyze(secret.as_str()),
    })
}

fn batch_json(items: &[BatchItem]) -> Value {
    let rows: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "password": item.secret.as_str(),
                "length": item.secret.length,
                "strength": item.strength,
            })
        })
        .collect();
    json!(rows)
}

/// Rebuilds batch rows from a `passwords` array for the export methods.
fn batch_items(params: &Value) -> Result<Vec<BatchItem>, String> {
    let passwords = params
        .get("passwords")
        .and_then(|v| v.as_array())
        .ok_or("missing passwords")?;
    passwords
        .iter()
        .map(|v| -> Result<BatchItem, String> {
            let value = v.as_str().ok_or("passwords must be strings")?;
            Ok(BatchItem {
                secret: GeneratedSecret::new(value.to_string()),
                strength: strength_estimator::analyze(value),
            })
        })
        .collect()
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

/// Dispatch a method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Generation ───
        "password.generate" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let policy = charset_policy(&a.settings_engine.get_settings().password, params)?;
            let secret = a.generate_password(&policy).map_err(|e| e.to_string())?;
            Ok(secret_json(&secret))
        }
        "passphrase.generate" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let policy = merged(&a.settings_engine.get_settings().passphrase, params)?;
            let secret = a.generate_passphrase(&policy).map_err(|e| e.to_string())?;
            Ok(secret_json(&secret))
        }
        "batch.generate" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings();
            let count = match params.get("count") {
                Some(v) => v.as_u64().ok_or("count must be a positive integer")? as usize,
                None => settings.batch.count,
            };
            let policy = match params.get("kind").and_then(|v| v.as_str()).unwrap_or("password") {
                "password" => {
                    let defaults = CharsetPolicy {
                        length: settings.batch.length,
                        ..settings.password.clone()
                    };
                    BatchPolicy::Password(charset_policy(&defaults, params)?)
                }
                "passphrase" => BatchPolicy::Passphrase(merged(&settings.passphrase, params)?),
                other => return Err(format!("unknown batch kind: {}", other)),
            };
            let items = a.generate_batch(&policy, count).map_err(|e| e.to_string())?;
            Ok(batch_json(&items))
        }
        "batch.export_csv" => {
            let items = batch_items(params)?;
            let content = export::batch_to_csv(&items).map_err(|e| e.to_string())?;
            Ok(json!({"content": content}))
        }
        "batch.export_json" => {
            let items = batch_items(params)?;
            let content = export::batch_to_json(&items).map_err(|e| e.to_string())?;
            Ok(json!({"content": content}))
        }

        // ─── Analysis & text tools ───
        "strength.analyze" => {
            let value = required_str(params, "value")?;
            serde_json::to_value(strength_estimator::analyze(value)).map_err(|e| e.to_string())
        }
        "text.shuffle" => {
            let value = required_str(params, "value")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let shuffled = a.shuffle(value).map_err(|e| e.to_string())?;
            Ok(json!({"value": shuffled}))
        }
        "text.counts" => {
            let value = required_str(params, "value")?;
            serde_json::to_value(CharacterCounts::of(value)).map_err(|e| e.to_string())
        }

        // ─── Templates & word lists ───
        "templates.list" => serde_json::to_value(templates::all()).map_err(|e| e.to_string()),
        "templates.apply" => {
            let id = required_str(params, "id")?;
            let template = templates::find(id).ok_or_else(|| format!("unknown template: {}", id))?;
            let policy = template.policy().map_err(|e| e.to_string())?;
            serde_json::to_value(policy).map_err(|e| e.to_string())
        }
        "wordlists.list" => {
            let lists: Vec<Value> = WordListId::all()
                .iter()
                .map(|id| {
                    json!({
                        "id": id.as_str(),
                        "name": id.display_name(),
                        "size": word_lists::words(*id).len(),
                    })
                })
                .collect();
            Ok(json!(lists))
        }

        // ─── History ───
        "history.archive" => {
            let value = required_str(params, "value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let entry = a.history.archive(value);
            serde_json::to_value(entry).map_err(|e| e.to_string())
        }
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let now = now_millis();
            let entries: Vec<Value> = a
                .history
                .list()
                .iter()
                .map(|h| {
                    json!({
                        "id": h.id,
                        "value": h.value,
                        "created_at": h.created_at,
                        "length": h.length,
                        "char_classes": h.char_classes,
                        "age": relative_age(h.created_at, now),
                    })
                })
                .collect();
            Ok(json!({
                "entries": entries,
                "count": a.history.len(),
                "capacity": a.history.capacity(),
            }))
        }
        "history.remove" => {
            let id = required_str(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.history.remove(id);
            Ok(json!({"ok": true}))
        }
        "history.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.history.clear();
            Ok(json!({"ok": true}))
        }
        "history.export" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let content = export::history_to_json(&a.history.list()).map_err(|e| e.to_string())?;
            Ok(json!({"content": content}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = required_str(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Parses one request line and returns the response object.
pub fn handle_line(app: &Mutex<App>, line: &str) -> Value {
    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return json!({"id": null, "error": format!("parse error: {}", e)}),
    };
    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req
        .get("params")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    match handle_method(app, method, &params) {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => json!({"id": id, "error": err}),
    }
}
