//! Multi-line editor for source code and YAML rules

use dioxus::prelude::*;

#[component]
pub fn CodeEditor(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 16)] rows: u32,
) -> Element {
    rsx! {
        textarea {
            class: "code-editor",
            rows: "{rows}",
            spellcheck: "false",
            value: "{value}",
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
