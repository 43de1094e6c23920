//! Browser navigation performed by the shell.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::RequestBuilder;
use crux_core::capability::Operation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationOperation {
    /// Reload the whole page
    Reload,
    /// Fetch `url` as a file download named `filename`
    Download { url: String, filename: String },
    /// Point the browser at `url`, e.g. a server-side attachment
    Open { url: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationOutput {
    Done,
}

impl Operation for NavigationOperation {
    type Output = NavigationOutput;
}

/// Command-based navigation API
pub struct Navigation<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Navigation<Effect, Event>
where
    Effect: Send + From<crux_core::Request<NavigationOperation>> + 'static,
    Event: Send + 'static,
{
    pub fn reload() -> RequestBuilder<NavigationOperation, Effect, Event> {
        RequestBuilder::new(NavigationOperation::Reload)
    }

    pub fn download(
        url: impl Into<String>,
        filename: impl Into<String>,
    ) -> RequestBuilder<NavigationOperation, Effect, Event> {
        RequestBuilder::new(NavigationOperation::Download {
            url: url.into(),
            filename: filename.into(),
        })
    }

    pub fn open(url: impl Into<String>) -> RequestBuilder<NavigationOperation, Effect, Event> {
        RequestBuilder::new(NavigationOperation::Open { url: url.into() })
    }
}
