use askama::Template;

use crate::{
    chat::ChatPhase,
    components::ui::{Avatar, AvatarSize, Button, ButtonVariant},
    i18n::Translator,
    icons::Icon,
    models::{ChatConversation, SenderType, WorkerDetail},
};

#[derive(Clone, Debug)]
struct ChatLine {
    mine: bool,
    text: String,
    time: String,
}

/// The chat dialog. Only rendered while the conversation is open.
#[derive(Template)]
#[template(path = "components/chat_modal.html")]
pub struct ChatModal {
    t: Translator,
    avatar: Avatar,
    worker_name: String,
    lines: Vec<ChatLine>,
    awaiting_reply: bool,
    send_action: String,
    close_action: String,
    events_url: String,
    close_icon: String,
    send_button: Button,
}

impl ChatModal {
    pub fn new(
        t: Translator,
        worker: &WorkerDetail,
        conversation: &ChatConversation,
        phase: ChatPhase,
    ) -> Self {
        let lines = conversation
            .messages
            .iter()
            .map(|message| ChatLine {
                mine: message.sender_type == SenderType::Customer,
                text: message.message.clone(),
                time: message.timestamp.format("%H:%M").to_string(),
            })
            .collect();

        Self {
            t,
            avatar: Avatar::new(&worker.name, worker.image.as_deref(), AvatarSize::Small),
            worker_name: worker.name.clone(),
            lines,
            awaiting_reply: phase == ChatPhase::AwaitingReply,
            send_action: format!("/workers/{}/chat", worker.id),
            close_action: format!("/workers/{}/chat/close", worker.id),
            events_url: format!("/workers/{}/chat/events", worker.id),
            close_icon: Icon::Close.svg(),
            send_button: Button::submit(t.get("chat.send"), ButtonVariant::Primary),
        }
    }
}
