use crate::asset::kind::{AssetType, TemplateFormat};
use crate::error::{Error, Result};

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub asset_type: AssetType,
    pub format: TemplateFormat,
    pub names: Vec<String>,
}

impl ResolvedRequest {
    /// Validates raw command-line values into a request.
    ///
    /// # Arguments
    /// * `raw_type` - Asset type name or single-letter alias
    /// * `raw_format` - Requested format, `None` to use the project default
    /// * `names` - Names of the assets to generate, in order
    /// * `typescript_default` - Whether the project defaults to TypeScript output
    ///
    /// # Returns
    /// * `Result<ResolvedRequest>` - The request with its format collapsed for
    ///   plain-file types, or the first validation error
    pub fn validate(
        raw_type: &str,
        raw_format: Option<&str>,
        names: Vec<String>,
        typescript_default: bool,
    ) -> Result<Self> {
        let asset_type: AssetType = raw_type.parse()?;

        let format: TemplateFormat = match raw_format {
            Some(raw) => raw.parse()?,
            None => TemplateFormat::default_for(typescript_default),
        };

        if names.is_empty() {
            return Err(Error::Usage(format!("at least one {asset_type} name is required")));
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::Usage("asset names must not be blank".into()));
        }

        let mut request = Self { asset_type, format, names };
        request.collapse_format();
        Ok(request)
    }

    fn collapse_format(&mut self) {
        let collapsed = self.format.collapse_for(self.asset_type);
        if collapsed != self.format {
            log::debug!(
                "Format '{}' collapsed to '{}' for {} assets",
                self.format,
                collapsed,
                self.asset_type
            );
            self.format = collapsed;
        }
    }
}
