use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::Utc;
use serde::Serialize;
use tokio::{
    sync::{broadcast, Mutex},
    task::{AbortHandle, JoinHandle},
    time::Instant,
};

use crate::{
    auth::new_id,
    models::{ChatConversation, ChatMessage, SenderType},
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChatKey {
    pub visitor_id: String,
    pub worker_id: String,
}

impl ChatKey {
    pub fn new(visitor_id: &str, worker_id: &str) -> Self {
        Self {
            visitor_id: visitor_id.to_string(),
            worker_id: worker_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Closed,
    Idle,
    AwaitingReply,
}

#[derive(Debug)]
pub enum SendOutcome {
    Sent(ChatMessage),
    Empty,
    Closed,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatEvent {
    #[serde(skip)]
    pub key: ChatKey,
    pub message: ChatMessage,
}

struct ChatRoom {
    /// Distinguishes a reopened room from the one a stale reply was scheduled for.
    generation: String,
    conversation: ChatConversation,
    pending: HashMap<u64, AbortHandle>,
    next_ticket: u64,
    touched: Instant,
}

impl ChatRoom {
    fn cancel_pending(&self) -> usize {
        for handle in self.pending.values() {
            handle.abort();
        }
        self.pending.len()
    }

    fn phase(&self) -> ChatPhase {
        if self.pending.is_empty() {
            ChatPhase::Idle
        } else {
            ChatPhase::AwaitingReply
        }
    }
}

#[derive(Clone)]
pub struct ChatHub {
    rooms: Arc<Mutex<HashMap<ChatKey, ChatRoom>>>,
    events: broadcast::Sender<ChatEvent>,
    delay: Duration,
}

impl ChatHub {
    pub fn new(delay: Duration) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            rooms: Arc::new(Mutex::new(HashMap::new())),
            events,
            delay,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Opens the room if needed, seeding it with `greeting`, and marks every
    /// message read. Returns the conversation as it stands.
    pub async fn open(&self, key: &ChatKey, greeting: &str) -> ChatConversation {
        let mut rooms = self.rooms.lock().await;
        let room = rooms.entry(key.clone()).or_insert_with(|| ChatRoom {
            generation: new_id(),
            conversation: ChatConversation {
                worker_id: key.worker_id.clone(),
                customer_id: key.visitor_id.clone(),
                messages: vec![message(&key.worker_id, SenderType::Worker, greeting)],
                unread_count: 0,
            },
            pending: HashMap::new(),
            next_ticket: 0,
            touched: Instant::now(),
        });
        room.touched = Instant::now();

        for message in &mut room.conversation.messages {
            message.read = true;
        }
        room.conversation.unread_count = 0;
        room.conversation.clone()
    }

    pub async fn conversation(&self, key: &ChatKey) -> Option<ChatConversation> {
        let rooms = self.rooms.lock().await;
        rooms.get(key).map(|room| room.conversation.clone())
    }

    pub async fn phase(&self, key: &ChatKey) -> ChatPhase {
        let rooms = self.rooms.lock().await;
        rooms.get(key).map_or(ChatPhase::Closed, ChatRoom::phase)
    }

    pub async fn send(&self, key: &ChatKey, text: &str, reply: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Empty;
        }

        let mut rooms = self.rooms.lock().await;
        let Some(room) = rooms.get_mut(key) else {
            return SendOutcome::Closed;
        };

        room.touched = Instant::now();
        let sent = message(&key.visitor_id, SenderType::Customer, text);
        let mut sent_read = sent.clone();
        sent_read.read = true;
        room.conversation.messages.push(sent_read);

        let ticket = room.next_ticket;
        room.next_ticket += 1;
        let handle = tokio::spawn(deliver_reply(
            Arc::clone(&self.rooms),
            self.events.clone(),
            key.clone(),
            room.generation.clone(),
            ticket,
            reply.to_string(),
            self.delay,
        ));
        room.pending.insert(ticket, handle.abort_handle());
        log::debug!(
            "Scheduled reply {ticket} from worker {} in {:?}",
            key.worker_id,
            self.delay
        );

        SendOutcome::Sent(sent)
    }

    /// Drops the room and cancels its pending replies. Returns whether a room
    /// was open.
    pub async fn close(&self, key: &ChatKey) -> bool {
        let mut rooms = self.rooms.lock().await;
        match rooms.remove(key) {
            Some(room) => {
                let cancelled = room.cancel_pending();
                if cancelled > 0 {
                    log::debug!(
                        "Cancelled {cancelled} pending replies from worker {}",
                        key.worker_id
                    );
                }
                true
            }
            None => false,
        }
    }

    pub async fn evict_idle(&self, idle: Duration) -> usize {
        let mut rooms = self.rooms.lock().await;
        let before = rooms.len();
        rooms.retain(|_, room| {
            let keep = room.touched.elapsed() < idle;
            if !keep {
                room.cancel_pending();
            }
            keep
        });
        before - rooms.len()
    }

    pub fn spawn_sweeper(&self, idle: Duration) -> JoinHandle<()> {
        let hub = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(idle.min(SWEEP_EVERY));
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let evicted = hub.evict_idle(idle).await;
                if evicted > 0 {
                    log::info!("Evicted {evicted} idle chat rooms");
                }
            }
        })
    }
}

const SWEEP_EVERY: Duration = Duration::from_secs(60);

fn message(sender_id: &str, sender_type: SenderType, text: &str) -> ChatMessage {
    ChatMessage {
        id: new_id(),
        sender_id: sender_id.to_string(),
        sender_type,
        message: text.to_string(),
        timestamp: Utc::now(),
        read: false,
    }
}

async fn deliver_reply(
    rooms: Arc<Mutex<HashMap<ChatKey, ChatRoom>>>,
    events: broadcast::Sender<ChatEvent>,
    key: ChatKey,
    generation: String,
    ticket: u64,
    text: String,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    let mut rooms = rooms.lock().await;
    let Some(room) = rooms.get_mut(&key) else {
        return;
    };
    if room.generation != generation {
        return;
    }

    let reply = message(&key.worker_id, SenderType::Worker, &text);
    room.conversation.messages.push(reply.clone());
    room.conversation.unread_count += 1;
    room.pending.remove(&ticket);
    drop(rooms);

    // Nobody listening is fine; the reply is already in the room.
    let _ = events.send(ChatEvent {
        key,
        message: reply,
    });
}
