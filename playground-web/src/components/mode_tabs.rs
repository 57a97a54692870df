//! Tab strip switching between pattern and rule editing

use super::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use playground_common::Mode;

/// A row of toggle buttons, one per [`Mode`], where exactly one is selected
#[component]
pub fn ModeTabs(selected: Mode, on_select: EventHandler<Mode>) -> Element {
    rsx! {
        div { class: "segmented", role: "tablist",
            for mode in Mode::ALL {
                Button {
                    key: "{mode}",
                    variant: if mode == selected { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    onclick: move |_| on_select.call(mode),
                    "{mode}"
                }
            }
        }
    }
}
