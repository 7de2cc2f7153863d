// src/domain/avatar/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use url::Url;

/// An absolute http(s) URL pointing at a remote avatar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrl(Url);

impl AvatarUrl {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("avatar url is required".into()));
        }

        let url = Url::parse(raw)
            .map_err(|err| DomainError::Validation(format!("invalid avatar url: {err}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::Validation(format!(
                "unsupported avatar url scheme '{}'",
                url.scheme()
            )));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(Self(url)),
            _ => Err(DomainError::Validation("avatar url has no host".into())),
        }
    }

    pub fn host(&self) -> &str {
        // checked in `parse`
        self.0.host_str().unwrap_or_default()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Hostnames the avatar proxy is willing to contact. An entry matches the
/// host itself and any subdomain of it.
#[derive(Debug, Clone, Default)]
pub struct HostAllowlist {
    suffixes: Vec<String>,
}

impl HostAllowlist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = entries
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { suffixes }
    }

    pub fn permits(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.suffixes.iter().any(|suffix| {
            host == *suffix
                || host
                    .strip_suffix(suffix.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    pub fn check(&self, url: &AvatarUrl) -> DomainResult<()> {
        if self.permits(url.host()) {
            Ok(())
        } else {
            Err(DomainError::Disallowed(format!(
                "host '{}' is not an allowed avatar source",
                url.host()
            )))
        }
    }
}
