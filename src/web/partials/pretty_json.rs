use std::collections::BTreeMap;

use maud::{Markup, PreEscaped, Render};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

/// Renders a JSON object as indented, markup-safe inline HTML.
pub struct PrettyJson<'a>(pub &'a Map<String, Value>);

impl Render for PrettyJson<'_> {
    fn render(&self) -> Markup {
        PreEscaped(pretty_object(self.0, 4))
    }
}

/// Produces a deterministic, key-sorted, indented serialization of the
/// object with every newline and space replaced by its markup equivalent,
/// so the result survives HTML whitespace collapsing.
pub fn pretty_object(object: &Map<String, Value>, indent: usize) -> String {
    let sorted = sort_keys(&Value::Object(object.clone()));
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    sorted
        .serialize(&mut serializer)
        .expect("serializing a JSON value into a buffer");
    markup_safe(&String::from_utf8(buffer).expect("serde_json emits UTF-8"))
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let entries: BTreeMap<&String, Value> =
                object.iter().map(|(key, value)| (key, sort_keys(value))).collect();
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), value))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

fn markup_safe(rendered: &str) -> String {
    let mut output = String::with_capacity(rendered.len());
    for character in rendered.chars() {
        match character {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\n' => output.push_str("<br/>"),
            ' ' => output.push_str("&nbsp;"),
            other => output.push(other),
        }
    }
    output
}
