//! Image asset lookup
//!
//! The dashboard only needs to know whether an image exists for an
//! initiative; the bytes are served by whatever hosts the assets.

use std::collections::HashSet;
use std::path::PathBuf;

/// Capability check: does an image exist for this identifier?
pub trait ImageCatalog {
    /// Whether an image panel exists for `id`
    fn has_image(&self, id: &str) -> bool;
}

impl<T: ImageCatalog + ?Sized> ImageCatalog for &T {
    fn has_image(&self, id: &str) -> bool {
        (**self).has_image(id)
    }
}

/// Public URL of the image for `id`
#[must_use]
pub fn asset_url(id: &str) -> String {
    format!("/assets/{id}.png")
}

/// Catalog backed by a directory of `<id>.png` files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirectory {
    root: PathBuf,
}

impl AssetDirectory {
    /// Catalog rooted at `root`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File an image for `id` would live in
    #[must_use]
    pub fn image_file(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.png"))
    }
}

impl ImageCatalog for AssetDirectory {
    fn has_image(&self, id: &str) -> bool {
        // ids are file stems, never paths
        if id.is_empty() || id.contains(&['/', '\\'][..]) || id == ".." {
            return false;
        }
        self.image_file(id).is_file()
    }
}

/// In-memory catalog of identifiers known to have images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    ids: HashSet<String>,
}

impl StaticCatalog {
    /// Catalog with no images
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Into<String>> FromIterator<S> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ImageCatalog for StaticCatalog {
    fn has_image(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_directory_checks_png_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("7.png"), b"png").unwrap();
        std::fs::write(dir.path().join("8.jpg"), b"jpg").unwrap();
        std::fs::create_dir(dir.path().join("9.png")).unwrap();

        let catalog = AssetDirectory::new(dir.path());
        assert!(catalog.has_image("7"));
        assert!(!catalog.has_image("8"));
        assert!(!catalog.has_image("9"));
        assert!(!catalog.has_image("missing"));
    }

    #[test]
    fn asset_directory_rejects_path_ids() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("x.png"), b"png").unwrap();

        let catalog = AssetDirectory::new(dir.path());
        assert!(!catalog.has_image("sub/x"));
        assert!(!catalog.has_image(""));
    }

    #[test]
    fn static_catalog_membership() {
        let catalog: StaticCatalog = ["1", "3"].into_iter().collect();
        assert!(catalog.has_image("1"));
        assert!(!catalog.has_image("2"));
        assert!((&catalog).has_image("3"));
    }

    #[test]
    fn asset_url_format() {
        assert_eq!(asset_url("A12"), "/assets/A12.png");
    }
}
