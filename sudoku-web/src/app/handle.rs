use crate::config::BuildConfig;
use crate::history::HistoryMode;
use crate::router::{RouteRecord, RouteTable};

/// Route table plus the navigation strategy the app is mounted with.
///
/// Built once by [`super::init_router`] and handed to the root component; nothing
/// reaches for it through a global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterHandle {
    table: RouteTable,
    history: HistoryMode,
    base: Option<String>,
}

impl RouterHandle {
    /// `base` is expected in canonical form (see [`crate::paths::normalize_base`]).
    #[must_use]
    pub const fn new(table: RouteTable, history: HistoryMode, base: Option<String>) -> Self {
        Self {
            table,
            history,
            base,
        }
    }

    #[must_use]
    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(RouteTable::standard(), config.history, config.base.clone())
    }

    /// Standard table, browser history, served from `/`.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_config(&BuildConfig::default())
    }

    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub const fn history(&self) -> HistoryMode {
        self.history
    }

    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Route for a location as the browser reports it (`pathname` plus optional
    /// query and fragment).
    ///
    /// Locations outside the base match nothing. Browser history resolves what
    /// follows the base; hash history resolves the fragment and treats a missing
    /// one as `/`.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<&RouteRecord> {
        match self.history {
            HistoryMode::Browser => self.table.resolve(self.strip_base(location)?),
            HistoryMode::Hash => {
                let (page, fragment) = location.split_once('#').unwrap_or((location, "/"));
                self.strip_base(page)?;
                self.table.resolve(fragment)
            }
        }
    }

    /// Browser-visible location for the path, query and fragment a mounted router
    /// reports. Hash routers only see the fragment, so `pathname` supplies the page.
    #[must_use]
    pub fn location_from_router(&self, routed: &str, pathname: &str) -> String {
        match self.history {
            HistoryMode::Browser => routed.to_string(),
            HistoryMode::Hash => format!("{pathname}#{routed}"),
        }
    }

    /// Link target for the named route under the current base and history mode.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<String> {
        let record = self.table.by_name(name)?;
        let base = self.base().unwrap_or("");
        Some(match self.history {
            HistoryMode::Browser if record.path == "/" && !base.is_empty() => format!("{base}/"),
            HistoryMode::Browser => format!("{base}{}", record.path),
            HistoryMode::Hash => format!("{base}/#{}", record.path),
        })
    }

    fn strip_base<'a>(&self, location: &'a str) -> Option<&'a str> {
        let Some(base) = self.base() else {
            return Some(location);
        };
        let rest = location.strip_prefix(base)?;
        if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
            Some(rest)
        } else {
            None
        }
    }
}
