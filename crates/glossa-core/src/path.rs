//! # Content Path Newtype
//!
//! All cross-document references in the catalog (`itemsUrl`, `packUrl`,
//! `nextPage`) are absolute, catalog-internal paths beginning with the
//! content version prefix. `ContentPath` wraps these strings and carries
//! the path conventions: version-prefix checks, external-URL rejection,
//! pack-id derivation from storage location, and the paginated index
//! layout (`{section}/index.json`, `{section}/pages/{N}.json`).
//!
//! A `ContentPath` stores the raw string unconditionally; the invariant
//! checks are queries so that validators can report violations instead of
//! failing at construction.

use serde::{Deserialize, Serialize};

/// The content version prefix every catalog-internal path must begin with.
pub const VERSION_PREFIX: &str = "/v1/";

/// An absolute, catalog-internal document path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentPath(String);

impl ContentPath {
    /// Wrap a raw path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the path begins with the content version prefix.
    pub fn is_versioned(&self) -> bool {
        self.0.starts_with(VERSION_PREFIX)
    }

    /// True if the value is a fully-qualified external URL, which is never
    /// permitted for catalog-internal references.
    pub fn is_external_url(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// The final path segment without its `.json` extension.
    ///
    /// This is the identifier implied by a document's storage location:
    /// `/v1/packs/pack-001.json` → `pack-001`.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.0.rsplit('/').next()?;
        name.strip_suffix(".json").filter(|s| !s.is_empty())
    }

    /// The pack id derived from this path's storage location.
    pub fn pack_id(&self) -> Option<&str> {
        self.file_stem()
    }

    /// The section root this index page belongs to, per the pagination
    /// layout conventions. Returns `None` for paths that do not look like
    /// index pages.
    ///
    /// - `{section}/index.json` → `{section}`
    /// - `{section}/pages/{N}.json` → `{section}`
    pub fn section_root(&self) -> Option<&str> {
        if let Some(root) = self.0.strip_suffix("/index.json") {
            return Some(root);
        }
        let (dir, name) = self.0.rsplit_once('/')?;
        if name.strip_suffix(".json")?.parse::<u32>().is_err() {
            return None;
        }
        dir.strip_suffix("/pages")
    }

    /// The conventional path for page `n` of the section owning this index
    /// page. Page 1 lives at `{section}/index.json`, page N ≥ 2 at
    /// `{section}/pages/{N}.json`.
    pub fn page_path(&self, n: u64) -> Option<ContentPath> {
        let root = self.section_root()?;
        Some(if n <= 1 {
            ContentPath::new(format!("{root}/index.json"))
        } else {
            ContentPath::new(format!("{root}/pages/{n}.json"))
        })
    }
}

impl std::fmt::Display for ContentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versioned_prefix() {
        assert!(ContentPath::new("/v1/packs/pack-001.json").is_versioned());
        assert!(!ContentPath::new("/v2/packs/pack-001.json").is_versioned());
        assert!(!ContentPath::new("packs/pack-001.json").is_versioned());
    }

    #[test]
    fn test_external_url_rejected() {
        assert!(ContentPath::new("https://cdn.example.com/v1/x.json").is_external_url());
        assert!(ContentPath::new("http://cdn.example.com/v1/x.json").is_external_url());
        assert!(!ContentPath::new("/v1/packs/pack-001.json").is_external_url());
    }

    #[test]
    fn test_pack_id_derivation() {
        let p = ContentPath::new("/v1/packs/pack-001.json");
        assert_eq!(p.pack_id(), Some("pack-001"));
        assert_eq!(ContentPath::new("/v1/packs/.json").pack_id(), None);
        assert_eq!(ContentPath::new("/v1/packs/pack-001.yaml").pack_id(), None);
    }

    #[test]
    fn test_section_root_from_first_page() {
        let p = ContentPath::new("/v1/workspaces/de/context/index.json");
        assert_eq!(p.section_root(), Some("/v1/workspaces/de/context"));
    }

    #[test]
    fn test_section_root_from_numbered_page() {
        let p = ContentPath::new("/v1/workspaces/de/context/pages/3.json");
        assert_eq!(p.section_root(), Some("/v1/workspaces/de/context"));
        // Non-numeric page names are not index pages.
        assert_eq!(
            ContentPath::new("/v1/workspaces/de/context/pages/extra.json").section_root(),
            None
        );
    }

    #[test]
    fn test_page_path_conventions() {
        let first = ContentPath::new("/v1/workspaces/de/context/index.json");
        assert_eq!(
            first.page_path(2).unwrap().as_str(),
            "/v1/workspaces/de/context/pages/2.json"
        );
        let third = ContentPath::new("/v1/workspaces/de/context/pages/3.json");
        assert_eq!(
            third.page_path(4).unwrap().as_str(),
            "/v1/workspaces/de/context/pages/4.json"
        );
        assert_eq!(
            third.page_path(1).unwrap().as_str(),
            "/v1/workspaces/de/context/index.json"
        );
    }

    #[test]
    fn test_serde_transparent() {
        let p: ContentPath = serde_json::from_str("\"/v1/packs/a.json\"").unwrap();
        assert_eq!(p.as_str(), "/v1/packs/a.json");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"/v1/packs/a.json\"");
    }
}
