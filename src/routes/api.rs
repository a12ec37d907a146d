use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use serde_json::Value;

use crate::api::{ApiCall, FormData, Payload, UploadedFile, Verb};
use crate::error::{ApiError, AppError, AppResult};
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/{*path}", any(forward))
}

/// Hand every `/api/*` request to the simulator.
async fn forward(State(state): State<AppState>, request: Request) -> AppResult<Response> {
    let path = request.uri().path().to_string();

    let Ok(verb) = request.method().as_str().parse::<Verb>() else {
        tracing::warn!("Unsupported method {} for {}", request.method(), path);
        return Ok(state
            .simulator
            .reject(ApiError::MethodNotAllowed)
            .await
            .into_response());
    };

    let payload = read_payload(request).await?;
    let call = ApiCall {
        path,
        verb,
        payload,
    };

    Ok(state.simulator.call(call).await.into_response())
}

// --- Body parsing ---

async fn read_payload(request: Request) -> AppResult<Option<Payload>> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        return Ok(Some(Payload::Form(collect_form(multipart).await?)));
    }

    let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(&bytes)?;
    Ok(Some(Payload::Json(value)))
}

/// Text parts become fields; file parts are measured and dropped.
async fn collect_form(mut multipart: Multipart) -> AppResult<FormData> {
    let mut form = FormData::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        if file_name.is_some() {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            form.files.push(UploadedFile {
                field: name,
                file_name,
                content_type,
                size: bytes.len(),
            });
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            form.fields.insert(name, text);
        }
    }

    Ok(form)
}
