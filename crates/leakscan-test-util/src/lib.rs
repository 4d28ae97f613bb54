//! Shared test utilities for the leakscan workspace.
//!
//! Summary receipts carry wall-clock timestamps, the tool version and absolute
//! paths from temp directories; these helpers rewrite them so golden files can
//! be compared byte for byte.

use serde_json::Value;

/// Normalize non-deterministic summary fields for golden-file comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, only when the root looks like a
///   summary (has `schema`, `tool`, `files` and `totals`).
/// - `started_at`, `finished_at` and `duration_ms` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_summary = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("files")
            && obj.contains_key("totals");
        if is_summary
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

/// Strip `root` (and a following `/`) from the summary's `output` and `files[].path`.
pub fn relativize_paths(mut value: Value, root: &str) -> Value {
    let root = root.replace('\\', "/");
    let prefix = format!("{}/", root.trim_end_matches('/'));
    let strip = |v: &mut Value| {
        if let Some(s) = v.as_str()
            && let Some(rest) = s.strip_prefix(&prefix)
        {
            *v = Value::String(rest.to_string());
        }
    };

    if let Some(output) = value.get_mut("output") {
        strip(output);
    }
    if let Some(files) = value.get_mut("files").and_then(Value::as_array_mut) {
        for file in files {
            if let Some(path) = file.get_mut("path") {
                strip(path);
            }
        }
    }
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
