use tracing::debug;

use crate::{Result, schema::Value};

/// A top-level definition selected for documentation.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    /// Definition label, e.g. `#Run`
    pub name: &'a str,
    /// The definition's value
    pub value: &'a Value,
}

/// Lists the package's struct-shaped definitions in declaration order.
///
/// Plain fields and definitions of any other kind are skipped.
///
/// # Errors
///
/// Returns `DocError::FieldDiscovery` if the root cannot list its members.
pub fn discover_fields(root: &Value) -> Result<Vec<Field<'_>>> {
    let members = root.fields(true)?;

    let fields = members
        .into_iter()
        .filter(|member| {
            let keep = member.is_definition() && member.value().kind().is_struct();
            if !keep {
                debug!(label = member.label(), "skipping non-struct definition or field");
            }
            keep
        })
        .map(|member| Field {
            name: member.label(),
            value: member.value(),
        })
        .collect();

    Ok(fields)
}
