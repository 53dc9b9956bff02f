/// Navigation history strategy the app mounts its router with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HistoryMode {
    /// HTML5 history API; paths live in the URL path under the base.
    #[default]
    Browser,
    /// Paths live in the URL fragment (`/#/`), for hosts without SPA fallback.
    Hash,
}

impl HistoryMode {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "browser" => Some(Self::Browser),
            "hash" => Some(Self::Hash),
            _ => None,
        }
    }

    /// Mode for a build-time setting; unset, empty or unknown values use browser history.
    #[must_use]
    pub fn from_setting(value: Option<&str>) -> Self {
        let Some(raw) = value.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };
        Self::parse(raw).unwrap_or_else(|| {
            log::warn!("Unknown ROUTER_HISTORY value {raw:?}; using browser history");
            Self::default()
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Hash => "hash",
        }
    }
}
