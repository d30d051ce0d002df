//! Axum route handlers for the lookup service.
//!
//! Every path except `/health` is a lookup: `/<coin-name-or-type>` resolves
//! to the JSON chain definition, whatever the request method.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::routing::get;
use coinchain::Resolver;
use coinchain::ensip11::{CoinTypeConverter, Ensip11};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, handle_panic};
use crate::response::corsify;

/// Shared application state for the lookup service.
pub type LookupState<C = Ensip11> = Arc<Resolver<C>>;

/// `* /<coin>` — Resolves a coin name or coin type to its chain.
///
/// # Errors
///
/// Returns 400 for unknown coins and chains, or 500 if the coin type cannot
/// be converted.
pub async fn lookup<C: CoinTypeConverter>(
    State(resolver): State<LookupState<C>>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    let chain = resolver.resolve(uri.path())?;
    tracing::debug!(%method, path = uri.path(), chain_id = chain.id, "Resolved chain");
    Ok(corsify(StatusCode::OK, chain, HeaderMap::new()))
}

/// `GET /health` — Liveness probe.
pub async fn health() -> Response {
    let body = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    corsify(StatusCode::OK, &body, HeaderMap::new())
}

/// Creates an Axum [`Router`] serving lookups from `resolver`.
///
/// Endpoints:
/// - `GET /health` — liveness probe
/// - any other path — coin lookup
///
/// Handler panics are answered with a `500` JSON error, CORS preflight
/// requests are answered for any origin, and requests are traced.
pub fn lookup_router<C>(resolver: LookupState<C>) -> Router
where
    C: CoinTypeConverter + 'static,
{
    Router::new()
        .route("/health", get(health))
        .fallback(lookup::<C>)
        .with_state(resolver)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
    use coinchain::chain::{ChainInfo, NativeCurrency};
    use coinchain::{ChainRegistry, CoinTypeError};
    use serde_json::Value;
    use tower::ServiceExt;

    struct Exploding;

    impl CoinTypeConverter for Exploding {
        fn evm_chain_id(&self, _coin_type: u64) -> Result<u64, CoinTypeError> {
            panic!("converter exploded")
        }
    }

    fn app() -> Router {
        lookup_router(Arc::new(Resolver::new(ChainRegistry::known())))
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, body)
    }

    async fn get_path(uri: &str) -> (StatusCode, HeaderMap, Value) {
        send(app(), Method::GET, uri).await
    }

    #[tokio::test]
    async fn test_lookup_by_name() {
        let (status, headers, body) = get_path("/eth").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Ethereum");
        assert_eq!(body["nativeCurrency"]["symbol"], "ETH");
        assert_eq!(body["rpcUrls"]["default"]["http"][0], "https://eth.merkle.io");
    }

    #[tokio::test]
    async fn test_lookup_name_and_type_agree() {
        let (_, _, by_name) = get_path("/ETH").await;
        let (_, _, by_type) = get_path("/60").await;
        assert_eq!(by_name, by_type);
    }

    #[tokio::test]
    async fn test_lookup_plain_coin_type() {
        let (status, _, body) = get_path("/61").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 61);
    }

    #[tokio::test]
    async fn test_lookup_ensip11_coin_type() {
        let (status, _, body) = get_path("/2147492101").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Base");
    }

    #[tokio::test]
    async fn test_lookup_invalid_coin_type() {
        let (status, headers, body) = get_path("/0xnotanumber").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            body,
            json!({
                "error": "Invalid coin type",
                "message": "The coin type or coin name 0xnotanumber could not be found",
            })
        );
    }

    #[tokio::test]
    async fn test_lookup_root_is_invalid() {
        let (status, _, body) = get_path("/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid coin type");
    }

    #[tokio::test]
    async fn test_lookup_chain_not_found() {
        let (status, headers, body) = get_path("/999999999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            body,
            json!({
                "error": "Chain not found",
                "message": "The chain 999999999 with ID 999999999 could not be found",
            })
        );
    }

    #[tokio::test]
    async fn test_lookup_conversion_failure_is_500() {
        let (status, headers, body) = get_path("/99999999999").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["error"], "CoinTypeError");
        assert_eq!(body["message"], "Coin type 99999999999 is out of range");
    }

    #[tokio::test]
    async fn test_lookup_ignores_query_and_method() {
        let (status, _, body) = send(app(), Method::POST, "/op?foo=bar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 10);
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let app = lookup_router(Arc::new(Resolver::with_converter(
            ChainRegistry::known(),
            Exploding,
        )));
        let (status, headers, body) = send(app, Method::GET, "/op").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            body,
            json!({ "error": "Error", "message": "converter exploded" })
        );
    }

    #[tokio::test]
    async fn test_custom_registry() {
        let registry = ChainRegistry::new().with_chains(vec![ChainInfo::new(
            31337,
            "Anvil",
            NativeCurrency::ether(),
            "http://127.0.0.1:8545",
        )]);
        let app = lookup_router(Arc::new(Resolver::new(registry)));
        let (status, _, body) = send(app.clone(), Method::GET, "/31337").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Anvil");

        let (status, _, _) = send(app, Method::GET, "/eth").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, headers, body) = get_path("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/eth")
            .header("origin", "https://example.com")
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
