//! Member form extractor
//!
//! The admin page submits `FormData` (multipart), other clients may send
//! JSON or urlencoded bodies. All three collapse into one [`MemberForm`].

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request},
};
use http::header;
use serde::Deserialize;
use shared::MemberFields;

use crate::services::PhotoInput;
use crate::utils::AppError;

/// Multipart part holding the client-side cropped image
const CROPPED_IMAGE_FIELD: &str = "croppedImageData";
/// Multipart part holding a raw image file
const PHOTO_FIELD: &str = "photo";

/// Profile fields plus the optional photo of a create/update request
#[derive(Debug, Default)]
pub struct MemberForm {
    pub fields: MemberFields,
    pub photo: Option<PhotoInput>,
}

/// JSON / urlencoded body shape
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberPayload {
    name: Option<String>,
    description: Option<String>,
    specialty: Option<String>,
    weak_point: Option<String>,
    cropped_image_data: Option<String>,
}

impl From<MemberPayload> for MemberForm {
    fn from(p: MemberPayload) -> Self {
        Self {
            fields: MemberFields {
                name: p.name,
                description: p.description,
                specialty: p.specialty,
                weak_point: p.weak_point,
            },
            photo: p
                .cropped_image_data
                .filter(|d| !d.trim().is_empty())
                .map(PhotoInput::DataUri),
        }
    }
}

impl<S> FromRequest<S> for MemberForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid(e.body_text()))?;
            return from_multipart(multipart).await;
        }

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<MemberPayload>::from_request(req, state).await?;
            return Ok(payload.into());
        }

        if content_type.is_empty() {
            // Bodiless PUT: nothing to merge
            return Ok(Self::default());
        }

        let Form(payload) = Form::<MemberPayload>::from_request(req, state).await?;
        Ok(payload.into())
    }
}

async fn from_multipart(mut multipart: Multipart) -> Result<MemberForm, AppError> {
    let mut form = MemberForm::default();
    let mut cropped: Option<String> = None;
    let mut file: Option<PhotoInput> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" => form.fields.name = Some(field.text().await?),
            "description" => form.fields.description = Some(field.text().await?),
            "specialty" => form.fields.specialty = Some(field.text().await?),
            "weakPoint" => form.fields.weak_point = Some(field.text().await?),
            CROPPED_IMAGE_FIELD => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    cropped = Some(text);
                }
            }
            PHOTO_FIELD => {
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let data = field.bytes().await?;
                // An empty file input still submits a part with no content
                if !filename.is_empty() && !data.is_empty() {
                    file = Some(PhotoInput::File {
                        filename,
                        data: data.to_vec(),
                    });
                }
            }
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    // The cropped image is derived from the file input, so it wins
    form.photo = cropped.map(PhotoInput::DataUri).or(file);
    Ok(form)
}
