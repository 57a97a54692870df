//! Language picker

use dioxus::prelude::*;
use playground_common::Lang;

/// Select over [`Lang::ALL`].
///
/// A tag this build doesn't support (from a newer share link) is kept as an
/// extra option so the selection still shows what the link asked for.
#[component]
pub fn LangSelect(selected: String, on_change: EventHandler<String>) -> Element {
    let unsupported = selected.parse::<Lang>().is_err().then(|| selected.clone());

    rsx! {
        select {
            class: "lang-select",
            aria_label: "Language",
            onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
            if let Some(tag) = unsupported {
                option { key: "{tag}", value: "{tag}", selected: true, "{tag} (unsupported)" }
            }
            for lang in Lang::ALL {
                option {
                    key: "{lang}",
                    value: lang.as_str(),
                    selected: lang.as_str() == selected,
                    {lang.label()}
                }
            }
        }
    }
}
