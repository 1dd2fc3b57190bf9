use super::{
    BodyFormat, DeliveryContext, DeliveryInstruction, DeliveryMode, DeliveryStrategy, RequestMode,
};
use crate::errors::Result;
use crate::markup::escape;
use crate::pagination::Page;

/// Each response is one frame holding its items and, when more follow, a
/// lazy frame for the next page that replaces itself with that page.
///
/// Frames wrap their rows, so the rows cannot live directly inside a
/// `<tbody>`; list markup must tolerate the extra wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullFrameStrategy;

impl FullFrameStrategy {
    pub fn frame_id(prefix: &str, page_index: usize) -> String {
        format!("{prefix}_page_{page_index}")
    }
}

impl DeliveryStrategy for FullFrameStrategy {
    fn mode(&self) -> DeliveryMode {
        DeliveryMode::FullFrame
    }

    fn deliver<T>(&self, page: &Page<T>, ctx: &DeliveryContext<'_, T>) -> Result<DeliveryInstruction> {
        let prefix = ctx.dom_prefix;
        let trigger = ctx.next_trigger(page, |next| Self::frame_id(prefix, next), RequestMode::Raw)?;

        let mut inner = ctx.renderer.render_items(page.items());
        if let Some(trigger) = &trigger {
            inner.push_str(&trigger.to_html());
        }

        let frame = format!(
            r#"<turbo-frame id="{}">{}</turbo-frame>"#,
            escape(&Self::frame_id(prefix, page.page_index())),
            inner
        );

        // A frame activation only needs the fragment; streams don't apply here.
        let body_fragment = match ctx.mode {
            RequestMode::Full => ctx.renderer.render_layout(&frame),
            RequestMode::Raw | RequestMode::Stream => frame,
        };

        Ok(DeliveryInstruction {
            mode: DeliveryMode::FullFrame,
            body_fragment,
            trigger,
            format: BodyFormat::Html,
        })
    }
}
