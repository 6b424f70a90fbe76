use toml::{Table, Value as TomlValue};

use super::{Kind, Member, Value, join_path};
use crate::{DocError, Result};

const DOC_KEY: &str = "_doc";
const TYPE_KEY: &str = "_type";
const KIND_KEY: &str = "_kind";
const ATTRS_KEY: &str = "_attrs";

/// Converts a merged package table into the root value.
pub(crate) fn package_to_value(table: &Table) -> Result<Value> {
    table_to_value("", false, table)
}

fn table_to_value(path: &str, definition: bool, table: &Table) -> Result<Value> {
    let mut value = Value::new(path, Kind::Struct);
    value.definition = definition;

    for (key, entry) in table {
        match key.as_str() {
            DOC_KEY => value.doc = string_list(path, DOC_KEY, entry)?,
            TYPE_KEY => value.declared_type = Some(string(path, TYPE_KEY, entry)?.to_string()),
            KIND_KEY => {
                let raw = string(path, KIND_KEY, entry)?;
                value.kind = raw
                    .parse()
                    .map_err(|details: String| DocError::invalid_schema(path, details))?;
            }
            ATTRS_KEY => value.attributes = string_list(path, ATTRS_KEY, entry)?,
            label => {
                let child_path = join_path(path, label);
                let child = entry_to_value(&child_path, label.starts_with('#'), entry)?;
                value.members.push(Member {
                    label: label.to_string(),
                    value: child,
                });
            }
        }
    }

    if !value.kind.is_struct() && !value.members.is_empty() {
        return Err(DocError::invalid_schema(
            path,
            format!("a value of kind {} cannot declare members", value.kind),
        ));
    }

    Ok(value)
}

fn entry_to_value(path: &str, definition: bool, entry: &TomlValue) -> Result<Value> {
    let kind = match entry {
        TomlValue::Table(table) => return table_to_value(path, definition, table),
        TomlValue::String(_) | TomlValue::Datetime(_) => Kind::String,
        TomlValue::Integer(_) => Kind::Int,
        TomlValue::Float(_) => Kind::Float,
        TomlValue::Boolean(_) => Kind::Bool,
        TomlValue::Array(_) => Kind::List,
    };

    let mut value = Value::new(path, kind).with_literal(entry.to_string());
    value.definition = definition;
    Ok(value)
}

fn string<'a>(path: &str, key: &str, entry: &'a TomlValue) -> Result<&'a str> {
    entry
        .as_str()
        .ok_or_else(|| DocError::invalid_schema(path, format!("`{key}` must be a string")))
}

fn string_list(path: &str, key: &str, entry: &TomlValue) -> Result<Vec<String>> {
    match entry {
        TomlValue::String(s) => Ok(vec![s.clone()]),
        TomlValue::Array(items) => items
            .iter()
            .map(|item| string(path, key, item).map(str::to_string))
            .collect(),
        _ => Err(DocError::invalid_schema(
            path,
            format!("`{key}` must be a string or an array of strings"),
        )),
    }
}
