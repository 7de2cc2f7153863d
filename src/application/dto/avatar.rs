use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct AvatarImage {
    /// Upstream `Content-Type`, if it sent one.
    pub content_type: Option<String>,
    pub body: Bytes,
}
