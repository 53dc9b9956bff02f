//! Deployment base path handling.
///
/// The base comes from `BASE_URL` at compile time, falling back to `PUBLIC_URL`
/// (e.g. `/sudoku` for a project page). Builds without either are served from `/`.
#[must_use]
pub fn build_base() -> Option<&'static str> {
    option_env!("BASE_URL").or(option_env!("PUBLIC_URL"))
}

/// Base path for the router (e.g., `/sudoku` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(build_base().unwrap_or(""))
}

/// URL for a static asset that respects the deployment base path.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, router_base().as_deref())
}

/// Canonical form of a base path: leading `/`, no trailing `/`, `None` for root.
#[must_use]
pub fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}

pub(crate) fn asset_path_with_base(relative: &str, base: Option<&str>) -> String {
    let rel = relative.trim_start_matches('/');
    match base {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path_with_base, normalize_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(
            asset_path_with_base("static/img/logo.svg", None),
            "/static/img/logo.svg"
        );
        assert_eq!(
            asset_path_with_base("/static/img/logo.svg", None),
            "/static/img/logo.svg"
        );
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("/static/img/logo.svg", Some("/sudoku")),
            "/sudoku/static/img/logo.svg"
        );
    }

    #[test]
    fn normalize_base_trims_and_anchors() {
        assert_eq!(normalize_base("/sudoku/"), Some(String::from("/sudoku")));
        assert_eq!(normalize_base(" sudoku "), Some(String::from("/sudoku")));
        assert_eq!(normalize_base("/apps/sudoku"), Some(String::from("/apps/sudoku")));
    }

    #[test]
    fn root_base_collapses_to_none() {
        assert_eq!(normalize_base(""), None);
        assert_eq!(normalize_base("/"), None);
        assert_eq!(normalize_base("  "), None);
    }
}
