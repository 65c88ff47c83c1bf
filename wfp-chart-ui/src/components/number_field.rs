//! Numeric input bound to one form field.

use crate::presenter::sanitize_field_value;
use crate::state::AppState;
use dioxus::prelude::*;
use wfp_calc::InputField;

/// Labeled number input. Negative entries are clamped to 0 as they are typed;
/// the field is outlined red while it is marked invalid.
#[component]
pub fn NumberField(field: InputField) -> Element {
    let mut state = use_context::<AppState>();
    let value = state.fields.read().get(&field).cloned().unwrap_or_default();
    let invalid = state.invalid.read().contains(&field);
    let name = field.name();
    let label_text = format!("{} ({})", field.label(), field.unit());
    let class = if invalid { "invalid" } else { "" };
    let border = if invalid { "2px solid #e74c3c" } else { "1px solid #ddd" };

    let on_input = move |evt: Event<FormData>| {
        let raw = evt.value();
        let value = sanitize_field_value(&raw).unwrap_or(raw);
        state.fields.write().insert(field, value);
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; margin: 6px 0;",
            label {
                r#for: "{name}",
                style: "font-weight: bold; margin-bottom: 2px;",
                "{label_text}"
            }
            input {
                id: "{name}",
                name: "{name}",
                class: "{class}",
                r#type: "number",
                min: "0",
                step: "any",
                required: true,
                value: "{value}",
                style: "padding: 8px 12px; border: {border}; border-radius: 4px; font-size: 14px;",
                oninput: on_input,
            }
        }
    }
}
