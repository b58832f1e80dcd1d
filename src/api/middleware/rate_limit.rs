//! Per-client throttling for the blog API.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Requests replenished per second for each client.
pub const PER_SECOND: u64 = 2;
/// Requests a client may send in a burst before being throttled.
pub const BURST_SIZE: u32 = 100;

/// Token bucket keyed by peer IP, applied to `/api/*`.
///
/// Over-limit requests get `429 Too Many Requests`. The peer address comes
/// from `ConnectInfo`, so the server is started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
