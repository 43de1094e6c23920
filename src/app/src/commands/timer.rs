//! One-shot timers kept by the shell.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;
use crux_core::capability::Operation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOperation {
    Start { millis: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimerOutput {
    Elapsed,
}

impl Operation for TimerOperation {
    type Output = TimerOutput;
}

/// Command-based timer API
pub struct Timer<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Timer<Effect, Event>
where
    Effect: Send + From<crux_core::Request<TimerOperation>> + 'static,
    Event: Send + 'static,
{
    /// Resolve once `millis` milliseconds have passed
    pub fn after(millis: u64) -> RequestBuilder<TimerOperation, Effect, Event> {
        RequestBuilder::new(TimerOperation::Start { millis })
    }
}
