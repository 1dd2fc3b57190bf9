//! Shapes a [`Page`] into a response the client can splice into a growing
//! list: either a chain of self-replacing frames or append/replace stream
//! actions against a persistent container.

mod append_delta;
mod full_frame;
mod locator;
pub mod stream;

use std::fmt;
use std::str::FromStr;

pub use append_delta::AppendDeltaStrategy;
pub use full_frame::FullFrameStrategy;
pub use locator::{PageLocator, QueryLocator};

use crate::errors::{PaginationError, Result};
use crate::markup::escape;
use crate::pagination::Page;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const STREAM_CONTENT_TYPE: &str = "text/vnd.turbo-stream.html; charset=utf-8";
pub const STREAM_MIME: &str = "text/vnd.turbo-stream.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    FullFrame,
    AppendDelta,
}

/// Request flavor the host detected for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// Normal page load, rendered inside the layout.
    #[default]
    Full,
    /// Fragment only, for a frame trigger being satisfied.
    Raw,
    /// Stream actions for append-delta delivery.
    Stream,
}

impl FromStr for RequestMode {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(Self::Full),
            "raw" => Ok(Self::Raw),
            "stream" => Ok(Self::Stream),
            other => Err(PaginationError::configuration(format!(
                "unknown request mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "full",
            Self::Raw => "raw",
            Self::Stream => "stream",
        };
        f.write_str(name)
    }
}

/// When a trigger fires its follow-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationPolicy {
    /// As soon as the trigger scrolls into view.
    #[default]
    OnVisible,
    /// When the user clicks the "load more" link.
    OnClick,
}

/// A lazily activated follow-up fetch for the next page.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub target: String,
    pub source_url: String,
    pub activation: ActivationPolicy,
}

impl Trigger {
    pub fn to_html(&self) -> String {
        let target = escape(&self.target);
        let src = escape(&self.source_url);
        match self.activation {
            ActivationPolicy::OnVisible => format!(
                r#"<turbo-frame id="{target}" src="{src}" loading="lazy"><p class="loading">Loading…</p></turbo-frame>"#
            ),
            ActivationPolicy::OnClick => format!(
                r#"<turbo-frame id="{target}"><a class="load-more" href="{src}">Load more</a></turbo-frame>"#
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Html,
    TurboStream,
}

impl BodyFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Html => HTML_CONTENT_TYPE,
            Self::TurboStream => STREAM_CONTENT_TYPE,
        }
    }
}

/// What a strategy produced for one page.
///
/// `trigger` is present exactly when the page has a next page.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryInstruction {
    pub mode: DeliveryMode,
    pub body_fragment: String,
    pub trigger: Option<Trigger>,
    pub format: BodyFormat,
}

impl DeliveryInstruction {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn is_final(&self) -> bool {
        self.trigger.is_none()
    }
}

/// Turns items into markup. Supplied by the host.
pub trait ItemRenderer<T> {
    fn render_items(&self, items: &[T]) -> String;

    /// Persistent container that append deliveries grow.
    fn render_container(&self, id: &str, content: &str) -> String {
        format!(r#"<div id="{}">{}</div>"#, escape(id), content)
    }

    /// Page chrome around a full (non-fragment) response.
    fn render_layout(&self, content: &str) -> String {
        content.to_string()
    }
}

/// Everything a strategy needs from the current request, passed explicitly.
pub struct DeliveryContext<'a, T> {
    pub mode: RequestMode,
    pub renderer: &'a dyn ItemRenderer<T>,
    pub locator: Option<&'a dyn PageLocator>,
    pub activation: ActivationPolicy,
    pub dom_prefix: &'a str,
}

impl<'a, T> DeliveryContext<'a, T> {
    pub fn new(mode: RequestMode, renderer: &'a dyn ItemRenderer<T>) -> Self {
        Self {
            mode,
            renderer,
            locator: None,
            activation: ActivationPolicy::default(),
            dom_prefix: "items",
        }
    }

    pub fn with_locator(mut self, locator: &'a dyn PageLocator) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn with_activation(mut self, activation: ActivationPolicy) -> Self {
        self.activation = activation;
        self
    }

    pub fn with_dom_prefix(mut self, prefix: &'a str) -> Self {
        self.dom_prefix = prefix;
        self
    }

    /// Trigger for the page after `page`, if there is one.
    ///
    /// A next page with no way to address it is an error: a missing trigger
    /// would silently end the list.
    fn next_trigger(
        &self,
        page: &Page<T>,
        target: impl FnOnce(usize) -> String,
        flavor: RequestMode,
    ) -> Result<Option<Trigger>> {
        let Some(next) = page.next_page_index() else {
            return Ok(None);
        };

        let locator = self.locator.ok_or_else(|| {
            PaginationError::configuration(format!(
                "page {next} exists but no page locator was provided"
            ))
        })?;

        Ok(Some(Trigger {
            target: target(next),
            source_url: locator.locate(next, flavor)?,
            activation: self.activation,
        }))
    }
}

pub trait DeliveryStrategy {
    fn mode(&self) -> DeliveryMode;

    fn deliver<T>(&self, page: &Page<T>, ctx: &DeliveryContext<'_, T>) -> Result<DeliveryInstruction>;
}

/// Strategy chosen once at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FullFrame(FullFrameStrategy),
    AppendDelta(AppendDeltaStrategy),
}

impl DeliveryStrategy for Strategy {
    fn mode(&self) -> DeliveryMode {
        match self {
            Self::FullFrame(s) => s.mode(),
            Self::AppendDelta(s) => s.mode(),
        }
    }

    fn deliver<T>(&self, page: &Page<T>, ctx: &DeliveryContext<'_, T>) -> Result<DeliveryInstruction> {
        match self {
            Self::FullFrame(s) => s.deliver(page, ctx),
            Self::AppendDelta(s) => s.deliver(page, ctx),
        }
    }
}
