// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod mutable;
pub mod remote;
pub mod roundtrip;

use std::{
    fmt,
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::sync::mpsc;

/// Immutable shared environment of all asynchronous tasks.
#[derive(Debug)]
pub struct Environment {
    api_url: Url,
    client: Client,
    pending_tasks_count: AtomicUsize,
}

impl Environment {
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            client: Client::new(),
            pending_tasks_count: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Resolve a relative path or path/query suffix against the
    /// versioned API base URL.
    pub fn join_api_url(&self, input: &str) -> anyhow::Result<Url> {
        let api_base_url = self.api_url.join("api/v1/")?;
        api_base_url.join(input).map_err(Into::into)
    }

    #[must_use]
    pub fn all_tasks_finished(&self) -> bool {
        self.pending_tasks_count.load(Ordering::Acquire) == 0
    }

    pub fn dispatch_task<I, T>(
        shared_self: Arc<Self>,
        message_tx: MessageSender<I, T::Output>,
        task: T,
    ) where
        T: Future + Send + 'static,
        T::Output: fmt::Debug + Send + 'static,
        I: fmt::Debug + Send + 'static,
    {
        shared_self.pending_tasks_count.fetch_add(1, Ordering::Acquire);
        tokio::spawn(async move {
            let effect = task.await;
            log::debug!("Received effect from task: {effect:?}");
            send_message(&message_tx, Message::Effect(effect));
            // Decrement the counter only after the effect has been sent
            // to prevent premature termination of the message loop.
            shared_self.pending_tasks_count.fetch_sub(1, Ordering::Release);
        });
    }
}

pub type MessageSender<I, E> = mpsc::UnboundedSender<Message<I, E>>;
pub type MessageReceiver<I, E> = mpsc::UnboundedReceiver<Message<I, E>>;
pub type MessageChannel<I, E> = (MessageSender<I, E>, MessageReceiver<I, E>);

pub fn message_channel<I, E>() -> (MessageSender<I, E>, MessageReceiver<I, E>) {
    mpsc::unbounded_channel()
}

pub fn send_message<I: fmt::Debug, E: fmt::Debug>(
    message_tx: &MessageSender<I, E>,
    message: impl Into<Message<I, E>>,
) {
    let message = message.into();
    log::debug!("Sending message: {message:?}");
    if let Err(message) = message_tx.send(message) {
        // Channel is closed, i.e. the receiver has been dropped
        log::debug!("Failed to send message: {:?}", message.0);
    }
}

#[async_trait]
pub trait AsyncTask<E> {
    async fn execute(self, shared_env: Arc<Environment>) -> E;
}

pub type RenderModelFn<M, I> = dyn FnMut(&M) -> Option<I> + Send;

#[derive(Debug, Clone)]
pub enum Message<I, E> {
    Intent(I),
    Effect(E),
}

impl<I, E> Message<I, E> {
    pub fn intent(intent: impl Into<I>) -> Self {
        Self::Intent(intent.into())
    }

    pub fn effect(effect: impl Into<E>) -> Self {
        Self::Effect(effect.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<E, T> {
    ApplyEffect(E),
    DispatchTask(T),
}

impl<E, T> Action<E, T> {
    pub fn apply_effect(effect: impl Into<E>) -> Self {
        Self::ApplyEffect(effect.into())
    }

    pub fn dispatch_task(task: impl Into<T>) -> Self {
        Self::DispatchTask(task.into())
    }
}

/// Outcome of handling a single message.
///
/// `NoProgress` indicates that neither follow-up messages have been
/// sent nor new tasks have been dispatched. The message loop terminates
/// once it runs out of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageHandled {
    Progressing,
    NoProgress,
}
