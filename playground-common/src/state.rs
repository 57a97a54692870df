//! The playground's editor state and its built-in sample

use serde::{Deserialize, Serialize};

use crate::lang::{Lang, NotSupported};
use crate::mode::Mode;

const DEFAULT_LANG: &str = "javascript";

const DEFAULT_QUERY: &str = "console.log($MATCH)";

const DEFAULT_REWRITE: &str = "logger.log($MATCH)";

const DEFAULT_CONFIG: &str = r#"# YAML Rule is more powerful!
# https://ast-grep.github.io/guide/rule-config.html#rule
rule:
  any:
    - pattern: console.log($A)
    - pattern: console.debug($A)
fix:
  logger.log($A)"#;

const DEFAULT_SOURCE: &str = r#"// console.log() will be matched by pattern!
// click diff tab to see rewrite.

function tryAstGrep() {
  console.log('matched in metavar!')
}

const multiLineExpression =
  console
   .log('Also matched!')

if (true) {
  const notThis = 'console.log("not me")'
} else {
  console.debug('matched by YAML')
}"#;

/// Everything a share link carries
///
/// Field names are the JSON keys of the link payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub mode: Mode,
    /// Pattern to search for
    pub query: String,
    /// Replacement template for matches of `query`
    pub rewrite: String,
    /// YAML rule, used instead of query/rewrite in [`Mode::Config`]
    pub config: String,
    /// Code the pattern runs against
    pub source: String,
    /// Language tag, see [`Lang`]
    pub lang: String,
}

impl Default for State {
    fn default() -> Self {
        Self::default_state()
    }
}

impl State {
    /// Fresh copy of the sample shown on first visit.
    pub fn default_state() -> Self {
        Self {
            mode: Mode::Patch,
            query: DEFAULT_QUERY.to_string(),
            rewrite: DEFAULT_REWRITE.to_string(),
            config: DEFAULT_CONFIG.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Overlay every field the patch sets; the rest are kept.
    pub fn merge(self, patch: StatePatch) -> Self {
        Self {
            mode: patch.mode.unwrap_or(self.mode),
            query: patch.query.unwrap_or(self.query),
            rewrite: patch.rewrite.unwrap_or(self.rewrite),
            config: patch.config.unwrap_or(self.config),
            source: patch.source.unwrap_or(self.source),
            lang: patch.lang.unwrap_or(self.lang),
        }
    }

    pub fn language(&self) -> Result<Lang, NotSupported> {
        self.lang.parse()
    }
}

/// A possibly incomplete state record, as decoded from an older or newer link.
///
/// Keys this version doesn't know are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatePatch {
    pub mode: Option<Mode>,
    pub query: Option<String>,
    pub rewrite: Option<String>,
    pub config: Option<String>,
    pub source: Option<String>,
    pub lang: Option<String>,
}

impl StatePatch {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.query.is_none()
            && self.rewrite.is_none()
            && self.config.is_none()
            && self.source.is_none()
            && self.lang.is_none()
    }

    /// Returns the full record, or the name of the first missing field.
    pub fn into_state(self) -> Result<State, &'static str> {
        Ok(State {
            mode: self.mode.ok_or("mode")?,
            query: self.query.ok_or("query")?,
            rewrite: self.rewrite.ok_or("rewrite")?,
            config: self.config.ok_or("config")?,
            source: self.source.ok_or("source")?,
            lang: self.lang.ok_or("lang")?,
        })
    }
}

impl From<State> for StatePatch {
    fn from(state: State) -> Self {
        Self {
            mode: Some(state.mode),
            query: Some(state.query),
            rewrite: Some(state.rewrite),
            config: Some(state.config),
            source: Some(state.source),
            lang: Some(state.lang),
        }
    }
}
