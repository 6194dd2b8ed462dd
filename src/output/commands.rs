use serde_json::{Value, json};

use crate::output::format::{create_styled_table, header_cell, styled_cell};
use crate::plugin::PluginCommand;

/// Table of the registered commands
pub(crate) fn commands_table(use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Command", use_color),
        header_cell("Name", use_color),
    ]);
    for command in PluginCommand::ALL {
        table.add_row(vec![
            styled_cell(command.id(), None, true),
            styled_cell(command.name(), None, false),
        ]);
    }
    table.to_string()
}

pub(crate) fn commands_json() -> Value {
    Value::Array(
        PluginCommand::ALL
            .iter()
            .map(|c| json!({ "id": c.id(), "name": c.name() }))
            .collect(),
    )
}
