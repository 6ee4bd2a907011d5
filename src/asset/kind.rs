//! Asset types and template formats

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// Category of a scaffolded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Page,
    Layout,
    Component,
    Store,
    Boot,
    SsrMiddleware,
}

impl AssetType {
    pub const ALL: [AssetType; 6] = [
        AssetType::Page,
        AssetType::Layout,
        AssetType::Component,
        AssetType::Store,
        AssetType::Boot,
        AssetType::SsrMiddleware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Page => "page",
            AssetType::Layout => "layout",
            AssetType::Component => "component",
            AssetType::Store => "store",
            AssetType::Boot => "boot",
            AssetType::SsrMiddleware => "ssrmiddleware",
        }
    }

    /// Single-letter alias accepted on the command line.
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            AssetType::Page => Some("p"),
            AssetType::Layout => Some("l"),
            AssetType::Component => Some("c"),
            AssetType::Store => Some("s"),
            AssetType::Boot => Some("b"),
            AssetType::SsrMiddleware => None,
        }
    }

    /// Types generated as a single script file, with no markup part.
    ///
    /// Their templates only vary by language, so API-style sub-formats collapse.
    pub fn is_plain_file(&self) -> bool {
        matches!(self, AssetType::Boot | AssetType::Store | AssetType::SsrMiddleware)
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw || kind.alias() == Some(raw))
            .ok_or_else(|| Error::InvalidAssetType(raw.to_string()))
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Template variant selecting the script API style and language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFormat {
    Default,
    Ts,
    TsOptions,
    TsClass,
    TsComposition,
    TsCompositionSetup,
}

impl TemplateFormat {
    pub const ALL: [TemplateFormat; 6] = [
        TemplateFormat::Default,
        TemplateFormat::Ts,
        TemplateFormat::TsOptions,
        TemplateFormat::TsClass,
        TemplateFormat::TsComposition,
        TemplateFormat::TsCompositionSetup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFormat::Default => "default",
            TemplateFormat::Ts => "ts",
            TemplateFormat::TsOptions => "ts-options",
            TemplateFormat::TsClass => "ts-class",
            TemplateFormat::TsComposition => "ts-composition",
            TemplateFormat::TsCompositionSetup => "ts-composition-setup",
        }
    }

    /// Format used when none was requested.
    pub fn default_for(typescript: bool) -> Self {
        if typescript {
            TemplateFormat::TsComposition
        } else {
            TemplateFormat::Default
        }
    }

    /// `ts` and every `ts-*` variant.
    pub fn is_typescript(&self) -> bool {
        !matches!(self, TemplateFormat::Default)
    }

    /// Drops the API-style part of the format for plain-file asset types.
    pub fn collapse_for(self, asset_type: AssetType) -> Self {
        if asset_type.is_plain_file() && self.is_typescript() {
            TemplateFormat::Ts
        } else {
            self
        }
    }
}

impl FromStr for TemplateFormat {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TemplateFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == raw)
            .ok_or_else(|| Error::InvalidAssetFormat(raw.to_string()))
    }
}

impl Display for TemplateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
