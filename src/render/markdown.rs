//! Markdown sections shared by the reference artifacts.

use crate::model::*;

/// Render a struct's reference section.
pub fn render_struct(s: &StructDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", s.name));
    lines.push(format!("**Location**: `{}:{}`\n", s.source_file, s.line));

    if !s.attributes.is_empty() {
        lines.push(format!("**Attributes**: `{}`\n", s.attributes.join(", ")));
    }

    if !s.doc.is_empty() {
        lines.push(s.doc.clone());
        lines.push(String::new());
    }

    if let Some(ref size) = s.size_calculation {
        lines.push("**Size Calculation**:\n".to_string());
        lines.push("```rust".to_string());
        lines.push(size.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    if !s.fields.is_empty() {
        lines.push("**Fields**:\n".to_string());
        for field in &s.fields {
            lines.push(render_field(field));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `- `name: type`` with ` - doc` appended when documented.
///
/// Multi-line field docs are folded onto the list item.
fn render_field(field: &FieldDoc) -> String {
    let mut item = format!("- `{}: {}`", field.name, field.ty);
    if !field.doc.is_empty() {
        item.push_str(" - ");
        item.push_str(&field.doc.replace('\n', " "));
    }
    item
}

/// Render a function's reference section.
pub fn render_function(func: &FunctionDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", func.name));
    lines.push(format!("**Location**: `{}:{}`\n", func.source_file, func.line));
    lines.push(format!("**Signature**: `{}`\n", func.signature));

    if !func.doc.is_empty() {
        lines.push(func.doc.clone());
        lines.push(String::new());
    }

    if !func.params.is_empty() {
        lines.push("**Parameters**:\n".to_string());
        for param in &func.params {
            lines.push(format!("- `{}: {}`", param.name, param.ty));
        }
        lines.push(String::new());
    }

    lines.push(format!("**Returns**: `{}`\n", func.return_type));

    lines.join("\n")
}
