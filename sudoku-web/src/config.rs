//! Build-time configuration read from the environment the wasm bundle was compiled in.

use crate::history::HistoryMode;
use crate::paths;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub base: Option<String>,
    pub history: HistoryMode,
}

impl BuildConfig {
    /// Settings baked in by `BASE_URL`/`PUBLIC_URL` and `ROUTER_HISTORY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(paths::build_base(), option_env!("ROUTER_HISTORY"))
    }

    #[must_use]
    pub fn from_values(base: Option<&str>, history: Option<&str>) -> Self {
        Self {
            base: base.and_then(paths::normalize_base),
            history: HistoryMode::from_setting(history),
        }
    }
}
