//! Nested key-path lookup over JSON dictionary trees.

use std::collections::BTreeMap;

use serde_json::Value;

/// Walks `tree` one `separator`-delimited segment at a time.
///
/// Returns `None` as soon as a segment is missing or the current node is not
/// an object. The node at the end of the path is returned whatever its type.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use khmer_lms_i18n::dictionary::lookup_path;
///
/// let tree = json!({ "dashboard": { "admin": { "title": "Admin" } } });
///
/// assert_eq!(lookup_path(&tree, "dashboard.admin.title", "."), Some(&json!("Admin")));
/// assert_eq!(lookup_path(&tree, "dashboard.teacher.title", "."), None);
/// ```
#[must_use]
pub fn lookup_path<'a>(tree: &'a Value, key_path: &str, separator: &str) -> Option<&'a Value> {
    key_path
        .split(separator)
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Like [`lookup_path`] but only succeeds on string leaves.
#[must_use]
pub fn lookup_string<'a>(tree: &'a Value, key_path: &str, separator: &str) -> Option<&'a str> {
    lookup_path(tree, key_path, separator)?.as_str()
}

/// Flattens a nested JSON object into a `separator`-joined key map.
///
/// Arrays are indexed with brackets (`date.monthsLong[0]`). Non-string leaves
/// are rendered with their JSON text.
#[must_use]
pub fn flatten_json(json: &Value, separator: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    flatten_json_value(json, separator, None, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut BTreeMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn tree() -> Value {
        json!({
            "dashboard": {
                "admin": { "title": "Admin Dashboard" },
                "count": 3
            },
            "date": { "daysShort": ["Sun", "Mon"] }
        })
    }

    #[rstest]
    #[case::leaf("dashboard.admin.title", Some("Admin Dashboard"))]
    #[case::missing_root("a.b.c", None)]
    #[case::missing_middle("dashboard.teacher.title", None)]
    #[case::through_leaf("dashboard.admin.title.extra", None)]
    #[case::object_leaf("dashboard.admin", None)]
    #[case::number_leaf("dashboard.count", None)]
    #[case::empty_path("", None)]
    fn test_lookup_string(#[case] path: &str, #[case] expected: Option<&str>) {
        let tree = tree();
        assert_that!(lookup_string(&tree, path, "."), eq(expected));
    }

    #[googletest::test]
    fn lookup_path_returns_arrays() {
        let tree = tree();

        let days = lookup_path(&tree, "date.daysShort", ".");

        expect_that!(days.and_then(Value::as_array).map(Vec::len), some(eq(2)));
    }

    #[googletest::test]
    fn lookup_path_custom_separator() {
        let tree = tree();

        expect_that!(
            lookup_string(&tree, "dashboard/admin/title", "/"),
            some(eq("Admin Dashboard"))
        );
        expect_that!(lookup_string(&tree, "dashboard.admin.title", "/"), none());
    }

    #[googletest::test]
    fn flatten_json_nested_and_arrays() {
        let result = flatten_json(&tree(), ".");

        expect_that!(result.get("dashboard.admin.title"), some(eq(&"Admin Dashboard".to_string())));
        expect_that!(result.get("dashboard.count"), some(eq(&"3".to_string())));
        expect_that!(result.get("date.daysShort[1]"), some(eq(&"Mon".to_string())));
        expect_that!(result.len(), eq(4));
    }
}
