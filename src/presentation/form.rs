use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use mime::Mime;
use secrecy::SecretString;
use url::form_urlencoded;

use crate::presentation::error::ApiError;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Username and password pulled from a submitted form
pub struct CredentialForm {
    pub username: String,
    pub password: SecretString,
}

impl CredentialForm {
    /// Read `username` and `password` from the request.
    ///
    /// Field names match case-insensitively and the first occurrence wins.
    /// Body fields come before query-string fields. A request without a
    /// `Content-Type` carries no body fields.
    pub async fn extract(request: Request) -> Result<Self, ApiError> {
        let query_fields: Vec<(String, String)> = request
            .uri()
            .query()
            .map(|query| form_urlencoded::parse(query.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let body_fields = match content_type(&request)? {
            None => Vec::new(),
            Some(mime) if mime.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() => {
                read_urlencoded(request).await?
            }
            Some(mime) if mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA => {
                read_multipart(request).await?
            }
            Some(_) => return Err(ApiError::UnsupportedMediaType),
        };

        let mut username = None;
        let mut password = None;
        for (name, value) in body_fields.into_iter().chain(query_fields) {
            if username.is_none() && name.eq_ignore_ascii_case("username") {
                username = Some(value);
            } else if password.is_none() && name.eq_ignore_ascii_case("password") {
                password = Some(value);
            }
        }

        let username = username
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let password = password.filter(|value| !value.is_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self {
                username,
                password: SecretString::from(password),
            }),
            _ => Err(ApiError::BadRequest("username and password are required")),
        }
    }
}

fn content_type(request: &Request) -> Result<Option<Mime>, ApiError> {
    let Some(value) = request.headers().get(CONTENT_TYPE) else {
        return Ok(None);
    };
    value
        .to_str()
        .ok()
        .and_then(|value| value.parse::<Mime>().ok())
        .map(Some)
        .ok_or(ApiError::UnsupportedMediaType)
}

async fn read_urlencoded(request: Request) -> Result<Vec<(String, String)>, ApiError> {
    let body = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| ApiError::BadRequest("invalid form data"))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

async fn read_multipart(request: Request) -> Result<Vec<(String, String)>, ApiError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|_| ApiError::BadRequest("invalid form data"))?;

    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("invalid form data"))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|_| ApiError::BadRequest("invalid form data"))?;
        fields.push((name, value));
    }

    Ok(fields)
}
