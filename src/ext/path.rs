use std::path::Path;

/// Extension trait for Path to render paths in user-facing messages
pub trait PathExt {
    /// Renders the path relative to `root` for user-facing messages.
    ///
    /// Falls back to the full path when it does not live under `root`.
    ///
    /// # Examples
    /// ```
    /// use assetgen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("/app/src/pages/Index.vue");
    /// assert_eq!(path.display_relative_to(Path::new("/app")), "src/pages/Index.vue");
    /// ```
    fn display_relative_to(&self, root: &Path) -> String;
}

impl PathExt for Path {
    fn display_relative_to(&self, root: &Path) -> String {
        self.strip_prefix(root).unwrap_or(self).display().to_string()
    }
}
