#[cfg(test)]
#[path = "csv_export_test.rs"]
mod tests;

use serde_json::Value;

pub const DEFAULT_FILE_NAME: &str = "listings.csv";

/// Serializes listing records to CSV bytes. The contract is bit-exact: the
/// header row is the keys of the first record in insertion order, every field
/// is JSON-stringified (strings quoted and escaped, numbers bare), nulls and
/// missing keys become the JSON empty string, and rows are joined with CRLF.
pub fn export(rows: &[Value]) -> Vec<u8> {
    let headers = match rows.first().and_then(|row| return row.as_object()) {
        Some(first) => first.keys().cloned().collect::<Vec<String>>(),
        None => return vec![],
    };

    let mut lines = vec![headers.join(",")];
    for row in rows {
        let fields = headers
            .iter()
            .map(|key| {
                match row.get(key) {
                    None | Some(Value::Null) => return "\"\"".to_string(),
                    Some(value) => return value.to_string(),
                }
            })
            .collect::<Vec<String>>();
        lines.push(fields.join(","));
    }

    return lines.join("\r\n").into_bytes();
}
