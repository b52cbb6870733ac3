//! HTML rendering of form fields.

use std::borrow::Cow;

use crate::domain::{FieldKey, FormContext, TaskInfo};

/// Escape `&`, `<`, `>`, `"` and `'` so the value is safe inside an
/// attribute or element body.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Fill `task_info` from the stored task when editing and the form carries
/// no value yet, then return the raw form value.
pub(crate) fn form_value(
    task_info: &mut TaskInfo,
    key: FieldKey,
    context: &FormContext,
    stored: impl FnOnce() -> String,
) -> String {
    if context.is_edit() && task_info.is_blank(key) {
        task_info.set(key, stored());
    }
    task_info.get(key).unwrap_or_default().to_string()
}

pub fn input(key: FieldKey, value: &str) -> String {
    format!(
        r#"<input class="form-control" name="tx_scheduler[{id}]" id="{id}" value="{value}">"#,
        id = key.as_str(),
        value = escape_html(value),
    )
}

pub fn textarea(key: FieldKey, value: &str) -> String {
    format!(
        r#"<textarea class="form-control" name="tx_scheduler[{id}]" id="{id}" rows="10">{value}</textarea>"#,
        id = key.as_str(),
        value = escape_html(value),
    )
}

/// Multi-select over `options`; selected values missing from `options` are
/// appended so a stale selection stays visible.
pub fn multi_select(key: FieldKey, options: &[String], selected: &[&str]) -> String {
    let mut values: Vec<&str> = options.iter().map(String::as_str).collect();
    for &s in selected {
        if !values.contains(&s) {
            values.push(s);
        }
    }

    let mut html = format!(
        r#"<select class="form-control" name="tx_scheduler[{id}][]" id="{id}" multiple="multiple" size="{size}">"#,
        id = key.as_str(),
        size = values.len().clamp(1, 10),
    );
    for value in values {
        let escaped = escape_html(value);
        let mark = if selected.contains(&value) {
            r#" selected="selected""#
        } else {
            ""
        };
        html.push_str(&format!(r#"<option value="{escaped}"{mark}>{escaped}</option>"#));
    }
    html.push_str("</select>");
    html
}
