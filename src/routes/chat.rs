use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::{
    chat::{ChatEvent, ChatKey, SendOutcome},
    i18n::Translator,
    session::Visitor,
    state::AppState,
};

#[derive(Deserialize)]
struct MessageForm {
    message: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/workers/{worker_id}/chat").route(web::post().to(send_message)))
        .service(
            web::resource("/workers/{worker_id}/chat/close").route(web::post().to(close_chat)),
        )
        .service(
            web::resource("/workers/{worker_id}/chat/events").route(web::get().to(stream_chat)),
        );
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, location))
        .finish()
}

async fn send_message(
    state: web::Data<AppState>,
    t: Translator,
    visitor: web::ReqData<Visitor>,
    path: web::Path<String>,
    form: web::Form<MessageForm>,
) -> HttpResponse {
    let worker_id = path.into_inner();
    if state.catalog.workers.find_by_id(&worker_id).is_none() {
        return HttpResponse::NotFound().finish();
    }

    let key = ChatKey::new(&visitor.id, &worker_id);
    let reply = t.get("chat.reply");
    let mut outcome = state.chats.send(&key, &form.message, reply).await;
    if let SendOutcome::Closed = outcome {
        log::debug!("Chat with worker {worker_id} was closed; reopening");
        state.chats.open(&key, t.get("chat.greeting")).await;
        outcome = state.chats.send(&key, &form.message, reply).await;
    }
    if let SendOutcome::Sent(message) = outcome {
        log::debug!("Chat message {} sent to worker {worker_id}", message.id);
    }
    redirect(format!("/workers/{worker_id}?chat=open"))
}

async fn close_chat(
    state: web::Data<AppState>,
    visitor: web::ReqData<Visitor>,
    path: web::Path<String>,
) -> HttpResponse {
    let worker_id = path.into_inner();
    state
        .chats
        .close(&ChatKey::new(&visitor.id, &worker_id))
        .await;
    redirect(format!("/workers/{worker_id}"))
}

async fn stream_chat(
    state: web::Data<AppState>,
    visitor: web::ReqData<Visitor>,
    path: web::Path<String>,
) -> HttpResponse {
    let key = ChatKey::new(&visitor.id, &path.into_inner());
    let rx = state.chats.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(event) if event.key == key => {
            Some(Ok::<web::Bytes, actix_web::Error>(event_to_bytes(&event)))
        }
        _ => None,
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(stream)
}

fn event_to_bytes(event: &ChatEvent) -> web::Bytes {
    let payload = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    web::Bytes::from(format!("data: {payload}\n\n"))
}
