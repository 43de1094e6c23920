//! Shell commands beyond HTTP and render.
//!
//! Each module defines the operation the shell performs, its output, and a
//! command-based API on top of the shared [`RequestBuilder`].

pub mod dialog;
pub mod navigation;
pub mod timer;

use crux_core::{capability::Operation, command, Command};
use std::marker::PhantomData;

/// Request builder for shell operations
#[must_use]
pub struct RequestBuilder<Op, Effect, Event> {
    operation: Op,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Op, Effect, Event> RequestBuilder<Op, Effect, Event>
where
    Op: Operation + Send + 'static,
    Effect: Send + From<crux_core::Request<Op>> + 'static,
    Event: Send + 'static,
{
    pub(crate) fn new(operation: Op) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = Op::Output>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }

    /// Hand the operation to the shell without waiting for anything in return
    pub fn fire(self) -> Command<Effect, Event> {
        let request = self.build();
        Command::new(move |ctx| async move {
            let _ = request.into_future(ctx).await;
        })
    }
}
