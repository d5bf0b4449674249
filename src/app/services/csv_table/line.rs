//! Quote-aware line tokenizer
//!
//! A `"` opens quote mode anywhere in a field; inside quote mode `""` is a
//! literal quote and a lone `"` closes it. Commas only split fields outside
//! quote mode. An unterminated quote never fails: the rest of the line is
//! kept as quoted content.

use std::mem::take;

/// Split one line into ordered fields.
///
/// Trailing empty fields are preserved, so a line with N unquoted commas
/// always yields N + 1 fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(take(&mut field)),
            _ => field.push(ch),
        }
    }

    fields.push(field);
    fields
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Join fields into one line, quoting fields that contain commas or quotes
/// and doubling internal quotes. Inverse of [`parse_line`] for fields without
/// embedded newlines.
pub fn serialize_line<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            if needs_quotes(field) {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                field.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
