use axum::http::{
    HeaderName, HeaderValue,
    header::{
        CONTENT_SECURITY_POLICY, SERVER, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
        X_FRAME_OPTIONS, X_XSS_PROTECTION,
    },
};
use tower::ServiceBuilder;
use tower::layer::util::{Identity, Stack};
use tower_http::set_header::SetResponseHeaderLayer;

type SetHeader = SetResponseHeaderLayer<HeaderValue>;

/// Stack of `SetHeader` layers, one per hardening header.
pub type SecurityHeaders = ServiceBuilder<
    Stack<
        SetHeader,
        Stack<
            SetHeader,
            Stack<SetHeader, Stack<SetHeader, Stack<SetHeader, Stack<SetHeader, Identity>>>>,
        >,
    >,
>;

/// Overwrite the fixed hardening headers on every response.
pub fn security_headers() -> SecurityHeaders {
    ServiceBuilder::new()
        .layer(overriding(X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .layer(overriding(X_FRAME_OPTIONS, "DENY"))
        .layer(overriding(X_XSS_PROTECTION, "1; mode=block"))
        .layer(overriding(
            STRICT_TRANSPORT_SECURITY,
            "max-age=31536000; includeSubDomains",
        ))
        .layer(overriding(CONTENT_SECURITY_POLICY, "default-src 'self'"))
        .layer(overriding(SERVER, ""))
}

fn overriding(name: HeaderName, value: &'static str) -> SetHeader {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
