use comfy_table::Color;
use serde_json::{Value, json};

use crate::output::format::{create_styled_table, header_cell, quote_if_padded, styled_cell};
use crate::plugin::{FieldKind, PanelRow};

/// Render the settings panel as a table.
pub(crate) fn settings_table(rows: &[PanelRow], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Setting", use_color),
        header_cell("Key", use_color),
        header_cell("Value", use_color),
        header_cell("Description", use_color),
    ]);

    for row in rows {
        let value_color = match (row.kind, row.value.as_str()) {
            (FieldKind::Toggle, "true") if use_color => Some(Color::Green),
            (FieldKind::Toggle, "false") if use_color => Some(Color::DarkGrey),
            _ => None,
        };
        let value = match row.kind {
            FieldKind::Text => quote_if_padded(&row.value),
            FieldKind::Toggle | FieldKind::Number => row.value.clone(),
        };
        table.add_row(vec![
            styled_cell(row.name, None, true),
            styled_cell(row.key, None, false),
            styled_cell(&value, value_color, false),
            styled_cell(row.description, None, false),
        ]);
    }

    table.to_string()
}

/// Panel rows as JSON, one object per field.
pub(crate) fn settings_json(rows: &[PanelRow]) -> Value {
    Value::Array(
        rows.iter()
            .map(|row| {
                json!({
                    "key": row.key,
                    "name": row.name,
                    "description": row.description,
                    "kind": row.kind.as_str(),
                    "value": row.value,
                })
            })
            .collect(),
    )
}
