use std::mem;

use toml::{Table, Value};

/// Merges imported package tables under the importing one
pub fn merge_package_tables(imports: Vec<Table>, main: Table) -> Table {
    let mut accumulated = Table::new();

    for import in imports {
        accumulated = merge_two_tables(accumulated, import);
    }

    merge_two_tables(accumulated, main)
}

/// Deep merges two tables, `overlay` winning on conflicts
///
/// Shared keys keep the overlay's position; keys only present in `base` are
/// appended after the overlay's own keys.
/// Non-table values are replaced wholesale.
pub fn merge_two_tables(base: Table, overlay: Table) -> Table {
    let mut merged = overlay;

    for (key, base_value) in base {
        match merged.get_mut(&key) {
            Some(slot) => {
                let overlay_value = mem::replace(slot, Value::Table(Table::new()));
                *slot = merge_values(base_value, overlay_value);
            }
            None => {
                merged.insert(key, base_value);
            }
        }
    }

    merged
}

fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            Value::Table(merge_two_tables(base_table, overlay_table))
        }
        (_, overlay) => overlay,
    }
}
