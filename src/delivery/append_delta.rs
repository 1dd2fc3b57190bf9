use super::stream::{self, StreamAction};
use super::{
    BodyFormat, DeliveryContext, DeliveryInstruction, DeliveryMode, DeliveryStrategy, RequestMode,
};
use crate::errors::Result;
use crate::pagination::Page;

/// The first response renders a named container and a named pager
/// placeholder. Every later response appends rows to that container and
/// swaps the placeholder, or removes it after the last page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendDeltaStrategy;

impl AppendDeltaStrategy {
    pub fn container_id(prefix: &str) -> String {
        format!("{prefix}_rows")
    }

    pub fn placeholder_id(prefix: &str) -> String {
        format!("{prefix}_pager")
    }
}

impl DeliveryStrategy for AppendDeltaStrategy {
    fn mode(&self) -> DeliveryMode {
        DeliveryMode::AppendDelta
    }

    fn deliver<T>(&self, page: &Page<T>, ctx: &DeliveryContext<'_, T>) -> Result<DeliveryInstruction> {
        let container_id = Self::container_id(ctx.dom_prefix);
        let placeholder_id = Self::placeholder_id(ctx.dom_prefix);
        let trigger = ctx.next_trigger(page, |_| placeholder_id.clone(), RequestMode::Stream)?;

        let items = ctx.renderer.render_items(page.items());
        let placeholder = trigger.as_ref().map(|t| t.to_html());

        let (body_fragment, format) = match ctx.mode {
            RequestMode::Stream => {
                let swap = match placeholder {
                    Some(html) => StreamAction::replace(&placeholder_id, html),
                    None => StreamAction::remove(&placeholder_id),
                };
                let actions = [StreamAction::append(&container_id, items), swap];
                (stream::encode_all(&actions), BodyFormat::TurboStream)
            }
            RequestMode::Full | RequestMode::Raw => {
                let mut fragment = ctx.renderer.render_container(&container_id, &items);
                fragment.push_str(&placeholder.unwrap_or_default());
                if ctx.mode == RequestMode::Full {
                    fragment = ctx.renderer.render_layout(&fragment);
                }
                (fragment, BodyFormat::Html)
            }
        };

        Ok(DeliveryInstruction {
            mode: DeliveryMode::AppendDelta,
            body_fragment,
            trigger,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::testing::{locator, page, ListRenderer};
    use crate::delivery::ActivationPolicy;
    use crate::errors::PaginationError;

    #[test]
    fn test_initial_then_final_delivery() {
        let renderer = ListRenderer;
        let locator = locator();

        let initial_ctx =
            DeliveryContext::<u32>::new(RequestMode::Full, &renderer).with_locator(&locator);
        let first = AppendDeltaStrategy
            .deliver(&page(vec![1, 2], 0, Some(1)), &initial_ctx)
            .unwrap();

        assert_eq!(first.mode, DeliveryMode::AppendDelta);
        assert_eq!(first.format, BodyFormat::Html);
        assert_eq!(
            first.body_fragment,
            concat!(
                r#"<main><div id="items_rows"><li>1</li><li>2</li></div>"#,
                r#"<turbo-frame id="items_pager" src="/items?filter=x&amp;page=1&amp;format=stream" loading="lazy">"#,
                r#"<p class="loading">Loading…</p></turbo-frame></main>"#
            )
        );
        assert_eq!(first.trigger.as_ref().unwrap().target, "items_pager");

        let stream_ctx =
            DeliveryContext::<u32>::new(RequestMode::Stream, &renderer).with_locator(&locator);
        let last = AppendDeltaStrategy
            .deliver(&page(vec![3], 1, None), &stream_ctx)
            .unwrap();

        assert!(last.is_final());
        assert_eq!(last.format, BodyFormat::TurboStream);
        assert_eq!(
            last.body_fragment,
            concat!(
                r#"<turbo-stream action="append" target="items_rows"><template><li>3</li></template></turbo-stream>"#,
                "\n",
                r#"<turbo-stream action="remove" target="items_pager"></turbo-stream>"#
            )
        );
    }

    #[test]
    fn test_stream_delivery_replaces_placeholder() {
        let renderer = ListRenderer;
        let locator = locator();
        let ctx = DeliveryContext::<u32>::new(RequestMode::Stream, &renderer).with_locator(&locator);

        let out = AppendDeltaStrategy.deliver(&page(vec![4], 1, Some(2)), &ctx).unwrap();

        let lines: Vec<&str> = out.body_fragment.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"<turbo-stream action="append" target="items_rows">"#));
        assert!(lines[1].starts_with(r#"<turbo-stream action="replace" target="items_pager">"#));
        assert!(lines[1].contains("page=2&amp;format=stream"));
        assert!(!out.body_fragment.contains("<main>"));
    }

    #[test]
    fn test_click_activation_swaps_in_load_more_link() {
        let renderer = ListRenderer;
        let locator = locator();
        let ctx = DeliveryContext::<u32>::new(RequestMode::Stream, &renderer)
            .with_locator(&locator)
            .with_activation(ActivationPolicy::OnClick);

        let out = AppendDeltaStrategy.deliver(&page(vec![4], 1, Some(2)), &ctx).unwrap();

        let lines: Vec<&str> = out.body_fragment.lines().collect();
        assert_eq!(
            lines[1],
            concat!(
                r#"<turbo-stream action="replace" target="items_pager"><template>"#,
                r#"<turbo-frame id="items_pager"><a class="load-more" href="/items?filter=x&amp;page=2&amp;format=stream">Load more</a></turbo-frame>"#,
                r#"</template></turbo-stream>"#
            )
        );
        assert!(!out.body_fragment.contains("loading=\"lazy\""));
        assert_eq!(out.trigger.unwrap().activation, ActivationPolicy::OnClick);
    }

    #[test]
    fn test_initial_without_next_page_has_no_placeholder() {
        let renderer = ListRenderer;
        let ctx = DeliveryContext::<u32>::new(RequestMode::Raw, &renderer);

        let out = AppendDeltaStrategy.deliver(&page(vec![1], 0, None), &ctx).unwrap();

        assert_eq!(out.body_fragment, r#"<div id="items_rows"><li>1</li></div>"#);
        assert!(out.trigger.is_none());
    }

    #[test]
    fn test_next_page_without_locator_is_configuration_error() {
        let renderer = ListRenderer;
        let ctx = DeliveryContext::<u32>::new(RequestMode::Stream, &renderer);

        let result = AppendDeltaStrategy.deliver(&page(vec![1], 3, Some(4)), &ctx);

        assert!(matches!(result, Err(PaginationError::Configuration(_))));
    }
}
