//! Terminal tables for the catalogue and for decoded constraints.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde_json::{Value, json};

use ssynth_model::{Catalogue, Constraints, ParamSpec, ParamValue, Transform, Transformer};

/// One row per registered kind, sorted by name.
pub fn kinds_table(catalogue: &Catalogue) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Parameters"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for entry in catalogue.entries() {
        let name = if entry.is_builtin() {
            kind_cell(entry.name())
        } else {
            kind_cell(entry.name()).fg(Color::Magenta)
        };
        table.add_row(vec![
            name,
            Cell::new(signature(entry.schema())),
            Cell::new(entry.description()),
        ]);
    }
    table
}

/// Kinds with their schemas, for machine consumers.
pub fn kinds_json(catalogue: &Catalogue) -> Value {
    let kinds: Vec<Value> = catalogue
        .entries()
        .map(|entry| {
            json!({
                "name": entry.name(),
                "builtin": entry.is_builtin(),
                "description": entry.description(),
                "parameters": entry.schema(),
            })
        })
        .collect();
    json!({
        "kinds": kinds,
        "instances": catalogue.instance_names().collect::<Vec<_>>(),
    })
}

/// One row per constructor parameter, in declaration order.
pub fn parameters_table(schema: &[ParamSpec]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Type"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    for spec in schema {
        table.add_row(vec![
            Cell::new(spec.name).add_attribute(Attribute::Bold),
            Cell::new(spec.type_label()),
            if spec.required {
                Cell::new("yes")
            } else {
                dim_cell("no")
            },
        ]);
    }
    table
}

/// One row per column; chain members follow their chain as indented rows.
pub fn constraints_table(constraints: &Constraints) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Parameters"),
    ]);
    apply_table_style(&mut table);
    for (column, transformer) in constraints {
        table.add_row(vec![
            Cell::new(column).add_attribute(Attribute::Bold),
            kind_cell(transformer.kind_name()),
            Cell::new(describe_params(transformer)),
        ]);
        if let Transformer::Chain(chain) = transformer {
            for member in chain.transformers() {
                table.add_row(vec![
                    dim_cell(""),
                    Cell::new(format!("  -> {}", member.kind_name())).fg(Color::DarkGrey),
                    Cell::new(describe_params(member)),
                ]);
            }
        }
    }
    table
}

/// `name: type` for each parameter; optional ones in brackets.
pub fn signature(schema: &[ParamSpec]) -> String {
    if schema.is_empty() {
        return "-".to_string();
    }
    schema
        .iter()
        .map(|spec| {
            if spec.required {
                format!("{}: {}", spec.name, spec.type_label())
            } else {
                format!("[{}: {}]", spec.name, spec.type_label())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Constructor arguments of `transformer` as `name=value` pairs.
///
/// A chain is summarized by its member count; members get their own rows.
pub fn describe_params(transformer: &Transformer) -> String {
    if let Transformer::Chain(chain) = transformer {
        return format!("{} steps", chain.len());
    }
    let schema = transformer.schema();
    let params: Vec<String> = transformer
        .attributes()
        .into_iter()
        .filter(|(name, _)| schema.iter().any(|spec| spec.name == *name))
        .map(|(name, value)| format!("{name}={}", render_value(&value)))
        .collect();
    if params.is_empty() {
        "-".to_string()
    } else {
        params.join(", ")
    }
}

/// Compact, single-line rendering of a parameter value.
pub fn render_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Null => "null".to_string(),
        ParamValue::Bool(flag) => flag.to_string(),
        ParamValue::Number(number) => number.to_string(),
        ParamValue::Text(text) => format!("{text:?}"),
        ParamValue::List(items) => format!("[{}]", render_items(items)),
        ParamValue::Tuple(items) if items.len() == 1 => format!("({},)", render_items(items)),
        ParamValue::Tuple(items) => format!("({})", render_items(items)),
        ParamValue::Map(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, item)| format!("{key}: {}", render_value(item)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        ParamValue::Transformer(transformer) => {
            format!("{}({})", transformer.kind_name(), describe_params(transformer))
        }
        ParamValue::Instance(instance) => instance.name().to_string(),
    }
}

fn render_items(items: &[ParamValue]) -> String {
    items.iter().map(render_value).collect::<Vec<_>>().join(", ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
