//! Single-line monospace input for patterns and rewrite templates

use dioxus::prelude::*;

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "text-input",
            spellcheck: "false",
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
