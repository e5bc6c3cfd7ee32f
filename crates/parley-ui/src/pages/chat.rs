use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::routes::{RouteDef, RouteName};

pub fn routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("/chat", RouteName::Chat),
        RouteDef::new("/chat/:id", RouteName::Conversation),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub from_user: bool,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub id: u64,
    pub title: String,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    fn new(id: u64) -> Self {
        Self {
            id,
            title: format!("Conversation {id}"),
            messages: Vec::new(),
        }
    }

    /// Append a user message; blank input is ignored. Returns whether it was added.
    pub fn post(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let id = self.messages.len() as u64;
        self.messages.push(ChatMessage {
            id,
            from_user: true,
            text: text.to_string(),
        });
        true
    }
}

/// Conversations held in memory for the lifetime of the app.
#[derive(Clone, Copy)]
pub struct Conversations(RwSignal<Vec<Conversation>>);

impl Conversations {
    pub fn new() -> Self {
        Self(RwSignal::new(Vec::new()))
    }

    fn create(&self) -> u64 {
        let mut nextId = 0;
        self.0.update(|list| {
            nextId = list.iter().map(|c| c.id + 1).max().unwrap_or(1);
            list.push(Conversation::new(nextId));
        });
        nextId
    }
}

impl Default for Conversations {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let conversations = expect_context::<Conversations>();
    let navigate = use_navigate();

    let startConversation = move |_| {
        let id = conversations.create();
        navigate(&format!("/chat/{id}"), Default::default());
    };

    view! {
        <div class="page-header">
            <h1>"Chat"</h1>
            <p class="subtitle">"Your conversations"</p>
        </div>
        <button class="btn btn-primary" on:click=startConversation>
            "New conversation"
        </button>
        {move || {
            let list = conversations.0.get();
            if list.is_empty() {
                view! {
                    <div class="card">
                        <p>"No conversations yet"</p>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <ul class="conversation-list">
                        {list
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <li class="card">
                                        <a href=format!("/chat/{}", c.id)>{c.title}</a>
                                        <span class="subtitle">
                                            {format!("{} messages", c.messages.len())}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
pub fn ConversationPage() -> impl IntoView {
    let conversations = expect_context::<Conversations>();
    let params = use_params_map();
    let conversationId = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok()))
    });
    let (draft, setDraft) = signal(String::new());

    let current = move || {
        let id = conversationId.get()?;
        conversations
            .0
            .with(|list| list.iter().find(|c| c.id == id).cloned())
    };

    let send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = conversationId.get_untracked() else {
            return;
        };
        let text = draft.get_untracked();
        let mut posted = false;
        conversations.0.update(|list| {
            if !list.iter().any(|c| c.id == id) {
                list.push(Conversation::new(id));
            }
            if let Some(c) = list.iter_mut().find(|c| c.id == id) {
                posted = c.post(&text);
            }
        });
        if posted {
            setDraft.set(String::new());
        }
    };

    view! {
        <div class="page-header">
            <h1>
                {move || {
                    current()
                        .map(|c| c.title)
                        .or_else(|| conversationId.get().map(|id| format!("Conversation {id}")))
                        .unwrap_or_else(|| "Conversation".to_string())
                }}
            </h1>
            <a href="/chat" class="subtitle">"Back to conversations"</a>
        </div>
        <div class="message-list">
            {move || {
                current()
                    .map(|c| c.messages)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|m| {
                        let class = if m.from_user { "message message-user" } else { "message" };
                        view! { <div class=class>{m.text}</div> }
                    })
                    .collect_view()
            }}
        </div>
        <form class="message-form" on:submit=send>
            <input
                type="text"
                placeholder="Type a message"
                prop:value=move || draft.get()
                on:input=move |ev| setDraft.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Send"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_cover_list_and_conversation() {
        let paths: Vec<&str> = routes().iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/chat", "/chat/:id"]);
    }

    #[test]
    fn post_ignores_blank_messages() {
        let mut conversation = Conversation::new(1);
        assert!(!conversation.post("   "));
        assert!(conversation.post("  hello "));
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].text, "hello");
        assert!(conversation.messages[0].from_user);
    }
}
