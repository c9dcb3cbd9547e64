use actix_web::{web, HttpResponse};

use crate::models::{ChatMessageIn, ChatMessageOut};

/// `POST /chats/{chat_id}/messages`
///
/// The body has already been validated by the `Json` extractor; nothing is
/// stored or delivered.
pub async fn post_message(
    path: web::Path<String>,
    data: web::Json<ChatMessageIn>,
) -> HttpResponse {
    let chat_id = path.into_inner();
    let msg = data.into_inner();
    log::debug!(
        "Message for chat {} as {:?} ({} chars)",
        chat_id,
        msg.display_role,
        msg.text.chars().count()
    );

    HttpResponse::Ok().json(ChatMessageOut::acknowledge(chat_id, msg))
}
