//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for the share action and the selected tab
    Primary,
    /// No background - text only with hover
    Ghost,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Ghost => "btn",
    };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
