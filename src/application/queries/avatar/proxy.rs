use super::AvatarQueryService;
use crate::application::{dto::AvatarImage, error::ApplicationResult};
use crate::domain::avatar::AvatarUrl;

impl AvatarQueryService {
    /// Validate `raw_url` against the allowlist and fetch it. Nothing is
    /// requested upstream unless both checks pass.
    pub async fn fetch_avatar(&self, raw_url: Option<&str>) -> ApplicationResult<AvatarImage> {
        let url = AvatarUrl::parse(raw_url.unwrap_or_default())?;

        if let Err(err) = self.allowlist.check(&url) {
            tracing::warn!(host = url.host(), "avatar host refused");
            return Err(err.into());
        }

        self.fetcher.fetch(&url).await.inspect_err(|err| {
            tracing::warn!(url = url.as_str(), error = %err, "avatar fetch failed");
        })
    }
}
