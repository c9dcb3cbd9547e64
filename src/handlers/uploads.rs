use actix_web::{web, HttpResponse};

use crate::models::{UploadIn, UploadOut};

/// `POST /uploads/mfp`: hands back a parse job id without scheduling anything.
pub async fn upload_mfp(data: web::Json<UploadIn>) -> HttpResponse {
    let upload = data.into_inner();
    log::debug!(
        "MFP upload {} (date hint: {})",
        upload.blob_url,
        upload.client_local_date_hint.as_deref().unwrap_or("none")
    );

    HttpResponse::Ok().json(UploadOut::queued())
}
