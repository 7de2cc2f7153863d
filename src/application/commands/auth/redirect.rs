use url::Url;

/// Decides where the browser lands after a completed login.
///
/// Only targets on the frontend origin are honoured; anything else falls back
/// to `frontend_origin + default_path`.
#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    frontend_origin: Url,
    default_path: String,
}

impl RedirectPolicy {
    pub fn new(frontend_origin: Url, default_path: impl Into<String>) -> Self {
        Self {
            frontend_origin,
            default_path: default_path.into(),
        }
    }

    pub fn default_target(&self) -> String {
        self.frontend_origin
            .join(&self.default_path)
            .map(String::from)
            .unwrap_or_else(|_| self.frontend_origin.to_string())
    }

    /// Accept a frontend URL for use as a post-login target, returning `None`
    /// when it points anywhere other than the frontend origin.
    pub fn sanitize(&self, candidate: &str) -> Option<String> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return None;
        }

        // origin-relative path; "//host" would be protocol-relative
        if candidate.starts_with('/') && !candidate.starts_with("//") {
            return self.frontend_origin.join(candidate).ok().map(String::from);
        }

        let url = Url::parse(candidate).ok()?;
        (url.origin() == self.frontend_origin.origin()).then(|| url.to_string())
    }

    pub fn resolve(&self, candidate: Option<&str>) -> String {
        candidate
            .and_then(|c| self.sanitize(c))
            .unwrap_or_else(|| self.default_target())
    }
}
