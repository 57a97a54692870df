//! playground-web - Browser front end for the pattern playground
//!
//! Restores the editor state from the URL fragment on load and writes it
//! back when the user shares a link. Matching and rewriting happen elsewhere;
//! this crate only edits and carries the text.

mod components;
pub mod location;

use components::{Button, ButtonVariant, CodeEditor, LangSelect, ModeTabs, TextInput};
use dioxus::prelude::*;
use location::LocationFragment;
use playground_common::{fragment_of, serialize, share_url, Mode, PlaygroundConfig};
use tracing::{info, warn};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_YAML: &str = include_str!("../playground.yaml");

/// Parse the embedded `playground.yaml`, falling back to defaults.
pub fn load_config() -> PlaygroundConfig {
    PlaygroundConfig::from_yaml_str(CONFIG_YAML).unwrap_or_else(|e| {
        warn!("Invalid playground.yaml, using defaults: {e}");
        PlaygroundConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let mut state = use_signal({
        let config = config.clone();
        move || config.restore_state(&LocationFragment)
    });
    let mut share_link = use_signal(|| None::<String>);

    let sync_hash = config.sync_hash_on_edit;
    use_effect(move || {
        if !sync_hash {
            return;
        }
        let encoded = serialize(&state.read());
        if let Err(e) = location::set_fragment(&encoded) {
            warn!("{e}");
        }
    });

    let share_base = config.share_base_url.clone();
    let on_share = move |_: MouseEvent| {
        let current = state.read().clone();
        let base = share_base
            .clone()
            .or_else(location::current_href)
            .unwrap_or_default();
        let url = share_url(&base, &current);
        if let Some(fragment) = fragment_of(&url) {
            if let Err(e) = location::set_fragment(fragment) {
                warn!("{e}");
            }
        }
        share_link.set(Some(url.clone()));
        spawn(async move {
            match location::copy_to_clipboard(&url).await {
                Ok(()) => info!("Copied share link to clipboard"),
                Err(e) => warn!("Failed to copy share link: {e:?}"),
            }
        });
    };

    let current = state.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "playground",
            section {
                div { class: "toolbar",
                    ModeTabs {
                        selected: current.mode,
                        on_select: move |mode| state.write().mode = mode,
                    }
                    LangSelect {
                        selected: current.lang.clone(),
                        on_change: move |lang| state.write().lang = lang,
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        title: Some("Copy a link to this playground".to_string()),
                        onclick: on_share,
                        "Share"
                    }
                }
                match current.mode {
                    Mode::Patch => rsx! {
                        label { class: "field-label",
                            "Pattern"
                            TextInput {
                                value: current.query.clone(),
                                placeholder: "console.log($MATCH)",
                                on_input: move |query| state.write().query = query,
                            }
                        }
                        label { class: "field-label",
                            "Rewrite"
                            TextInput {
                                value: current.rewrite.clone(),
                                placeholder: "logger.log($MATCH)",
                                on_input: move |rewrite| state.write().rewrite = rewrite,
                            }
                        }
                    },
                    Mode::Config => rsx! {
                        label { class: "field-label",
                            "Rule"
                            CodeEditor {
                                value: current.config.clone(),
                                on_input: move |config| state.write().config = config,
                            }
                        }
                    },
                }
                if let Some(url) = share_link() {
                    p { class: "share-url", "{url}" }
                }
            }
            section {
                label { class: "field-label",
                    "Source"
                    CodeEditor {
                        value: current.source.clone(),
                        rows: 24,
                        on_input: move |source| state.write().source = source,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_common::State;

    #[test]
    fn embedded_config_parses() {
        let config = PlaygroundConfig::from_yaml_str(CONFIG_YAML).unwrap();
        assert_eq!(config.default_lang.as_deref(), Some("javascript"));
        assert!(!config.sync_hash_on_edit);
        assert_eq!(load_config(), config);
    }

    #[test]
    fn embedded_config_keeps_sample() {
        assert_eq!(load_config().default_state(), State::default_state());
    }
}
