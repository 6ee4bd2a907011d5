//! Detection of the script language used by existing project files.

use std::fmt::Display;
use std::path::Path;

/// Script extension of a plain-language project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptExtension {
    Ts,
    Js,
}

impl ScriptExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptExtension::Ts => ".ts",
            ScriptExtension::Js => ".js",
        }
    }
}

impl Display for ScriptExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decides whether the file at `stem` (relative to `project_root`, without
/// extension) is written in TypeScript.
///
/// Returns [`ScriptExtension::Ts`] when `<stem>.ts` exists and
/// [`ScriptExtension::Js`] otherwise. Only checks for existence.
pub fn detect_extension<P: AsRef<Path>>(stem: &str, project_root: P) -> ScriptExtension {
    let candidate = project_root.as_ref().join(format!("{stem}{}", ScriptExtension::Ts));
    let extension =
        if candidate.is_file() { ScriptExtension::Ts } else { ScriptExtension::Js };
    log::trace!("Detected '{extension}' for '{stem}'");
    extension
}
