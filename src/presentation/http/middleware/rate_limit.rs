// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

// one token every 100 ms, i.e. 10 requests per second sustained
const AVATAR_REPLENISH_MILLIS: u64 = 100;
const AVATAR_BURST: u32 = 20;

type AvatarLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for the avatar proxy so the outbound fetcher cannot be
/// used as an amplifier. Keys on forwarding headers, then the peer address.
pub fn avatar_rate_limit_layer() -> AvatarLimiter {
    static LIMITER: OnceLock<AvatarLimiter> = OnceLock::new();

    LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_millisecond(AVATAR_REPLENISH_MILLIS);
            builder.burst_size(AVATAR_BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("valid avatar rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
