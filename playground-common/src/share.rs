//! Restoring state from a share link and building new ones

use tracing::{info, warn};

use crate::codec::{decode_patch, serialize};
use crate::state::State;

/// Where the current URL fragment comes from.
///
/// Implementations return the fragment without its leading `#`, or `None`
/// when the URL has no fragment.
pub trait FragmentSource {
    fn fragment(&self) -> Option<String>;
}

impl FragmentSource for Option<String> {
    fn fragment(&self) -> Option<String> {
        self.clone()
    }
}

impl FragmentSource for &str {
    fn fragment(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

/// Read the fragment and rebuild the editor state from it.
///
/// Never fails: a missing or unreadable fragment yields the default sample.
pub fn restore_state(source: &impl FragmentSource) -> State {
    restore_state_from(source.fragment().as_deref())
}

pub fn restore_state_from(fragment: Option<&str>) -> State {
    restore_over(State::default_state(), fragment)
}

/// Merge the decoded fragment over `base`, falling back to `base` untouched.
pub(crate) fn restore_over(base: State, fragment: Option<&str>) -> State {
    let fragment = fragment.map(|f| f.strip_prefix('#').unwrap_or(f).trim());
    let Some(fragment) = fragment.filter(|f| !f.is_empty()) else {
        info!("No share fragment, starting from the default sample");
        return base;
    };

    match decode_patch(fragment) {
        Ok(patch) => {
            info!("Restored playground state from share link");
            base.merge(patch)
        }
        Err(e) => {
            warn!("Ignoring share fragment: {e}");
            base
        }
    }
}

/// Build `<base_url>#<payload>`, replacing any fragment `base_url` already has.
pub fn share_url(base_url: &str, state: &State) -> String {
    let base = base_url.split_once('#').map_or(base_url, |(base, _)| base);
    format!("{base}#{}", serialize(state))
}

/// The fragment of a full URL, without the `#`. Empty fragments count as absent.
pub fn fragment_of(url: &str) -> Option<&str> {
    url.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    #[test]
    fn absent_fragment_gives_default() {
        assert_eq!(restore_state_from(None), State::default_state());
        assert_eq!(restore_state_from(Some("")), State::default_state());
        assert_eq!(restore_state_from(Some("#")), State::default_state());
        assert_eq!(restore_state(&None::<String>), State::default_state());
    }

    #[test]
    fn garbage_fragment_gives_default() {
        assert_eq!(restore_state(&"not-base64!"), State::default_state());
        assert_eq!(
            restore_state_from(Some("bm90IGpzb24=")),
            State::default_state()
        );
    }

    #[test]
    fn partial_fragment_merges_over_default() {
        let restored = restore_state(&"eyJxdWVyeSI6ImZvbyJ9");
        let expected = State {
            query: "foo".into(),
            ..State::default_state()
        };
        assert_eq!(restored, expected);
    }

    #[test]
    fn leading_hash_is_tolerated() {
        let restored = restore_state_from(Some("#eyJxdWVyeSI6ImZvbyJ9"));
        assert_eq!(restored.query, "foo");
    }

    #[test]
    fn mistyped_field_discards_whole_fragment() {
        let fragment = STANDARD.encode(r#"{"query":"foo","mode":"Diff"}"#);
        assert_eq!(restore_state_from(Some(&fragment)), State::default_state());
    }

    #[test]
    fn full_record_restores_exactly() {
        let state = State {
            mode: Mode::Config,
            config: "rule:\n  pattern: foo($$$)".into(),
            ..State::default_state()
        };
        let url = share_url("https://example.com/playground", &state);
        assert_eq!(restore_state_from(fragment_of(&url)), state);
    }

    #[test]
    fn share_url_replaces_existing_fragment() {
        let state = State::default_state();
        let url = share_url("https://example.com/#old", &state);
        assert_eq!(url, format!("https://example.com/#{}", serialize(&state)));
        assert_eq!(url.matches('#').count(), 1);
    }

    #[test]
    fn fragment_of_splits_url() {
        assert_eq!(fragment_of("https://a.b/c#xyz"), Some("xyz"));
        assert_eq!(fragment_of("https://a.b/c#"), None);
        assert_eq!(fragment_of("https://a.b/c"), None);
    }
}
