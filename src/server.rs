//! HTTP middleware wrapped around the rendered page and the `/pkg` bundle.

use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

/// Negotiates gzip/brotli from `Accept-Encoding`; the WASM bundle and the
/// rendered page both shrink well.
pub fn middleware() -> ServiceBuilder<Stack<CompressionLayer, Identity>> {
    ServiceBuilder::new().layer(CompressionLayer::new())
}
