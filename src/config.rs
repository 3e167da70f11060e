use crate::error::CrierError;
use url::Url;

/// Validated inputs for the `post` command.
///
/// The CLI parses the four options as optional so that each absent field can
/// be reported with its own message here, before any network call is made.
#[derive(Debug, Clone, PartialEq)]
pub struct PostConfig {
    /// Type prefix, matched against "channels" and "groups"
    pub kind_prefix: String,
    /// Exact display name of the destination
    pub name: String,
    /// API token, passed verbatim as a query parameter
    pub token: String,
    /// Message text to post
    pub message: String,
}

impl PostConfig {
    pub fn from_options(
        kind_prefix: Option<String>,
        name: Option<String>,
        token: Option<String>,
        message: Option<String>,
    ) -> Result<Self, CrierError> {
        Ok(Self {
            kind_prefix: require("--type", kind_prefix)?,
            name: require("--name", name)?,
            token: require("--token", token)?,
            message: require("--message", message)?,
        })
    }
}

/// Validated inputs for the `list` command
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    pub kind_prefix: String,
    pub token: String,
}

impl ListConfig {
    pub fn from_options(
        kind_prefix: Option<String>,
        token: Option<String>,
    ) -> Result<Self, CrierError> {
        Ok(Self {
            kind_prefix: require("--type", kind_prefix)?,
            token: require("--token", token)?,
        })
    }
}

/// An option counts as present only when supplied and non-empty
fn require(option: &'static str, value: Option<String>) -> Result<String, CrierError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CrierError::MissingOption(option)),
    }
}

/// Accept only absolute http(s) URLs for the API host
pub fn validate_api_url(url_str: &str) -> Result<(), CrierError> {
    let url = Url::parse(url_str)
        .map_err(|e| CrierError::Config(format!("Invalid API URL '{url_str}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(CrierError::Config(format!(
            "Invalid API URL scheme '{scheme}': only HTTP and HTTPS are supported"
        ))),
    }
}
