//! Blocking operator confirmation, e.g. `window.confirm()` in the browser shell.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;
use crux_core::capability::Operation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOperation {
    Confirm { message: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DialogOutput {
    Confirmed,
    Declined,
}

impl DialogOutput {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl Operation for DialogOperation {
    type Output = DialogOutput;
}

/// Command-based dialog API
pub struct Dialog<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Dialog<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DialogOperation>> + 'static,
    Event: Send + 'static,
{
    /// Ask the operator to confirm `message`
    pub fn confirm(message: impl Into<String>) -> RequestBuilder<DialogOperation, Effect, Event> {
        RequestBuilder::new(DialogOperation::Confirm {
            message: message.into(),
        })
    }
}
