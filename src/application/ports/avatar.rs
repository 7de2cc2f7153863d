use crate::application::{ApplicationResult, dto::AvatarImage};
use crate::domain::avatar::AvatarUrl;
use async_trait::async_trait;

#[async_trait]
pub trait AvatarFetcher: Send + Sync {
    /// Fetch the image. Non-success upstream statuses and transport failures
    /// are reported as `ApplicationError::Upstream`.
    async fn fetch(&self, url: &AvatarUrl) -> ApplicationResult<AvatarImage>;
}
