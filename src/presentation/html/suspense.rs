//! Streamed placeholder regions.
//!
//! A boundary is first written in its `Pending` state with a fallback. Once the
//! wrapped future resolves, a `<template>` holding the real content (or a failure
//! notice) is written together with a small script that swaps it in. Clients
//! without scripting still receive the full content at the end of the document.

use crate::application::ApplicationResult;
use bytes::Bytes;
use futures_util::{
    future,
    stream::{self, Stream, StreamExt},
};
use maud::{Markup, PreEscaped, html};
use std::{convert::Infallible, future::Future};

#[derive(Debug, Clone)]
pub enum BoundaryState {
    Pending,
    Loaded(Markup),
    Failed,
}

#[derive(Debug, Clone)]
pub struct SuspenseBoundary {
    id: &'static str,
    fallback: Markup,
    failure: Markup,
}

impl SuspenseBoundary {
    pub const fn new(id: &'static str, fallback: Markup, failure: Markup) -> Self {
        Self {
            id,
            fallback,
            failure,
        }
    }

    pub fn render(&self, state: &BoundaryState) -> Markup {
        match state {
            BoundaryState::Pending => html! {
                div id=(self.id) data-suspense="pending" { (self.fallback) }
            },
            BoundaryState::Loaded(content) => self.resolved("loaded", content),
            BoundaryState::Failed => self.resolved("failed", &self.failure),
        }
    }

    fn resolved(&self, state: &str, content: &Markup) -> Markup {
        let template_id = format!("{}-content", self.id);
        // JSON string literals are valid JavaScript string literals.
        let swap = format!(
            concat!(
                "(function(){{",
                "var t=document.getElementById({template}),b=document.getElementById({boundary});",
                "if(t&&b){{b.replaceWith(t.content.cloneNode(true));t.remove();}}",
                "}})();"
            ),
            template = serde_json::Value::from(template_id.as_str()),
            boundary = serde_json::Value::from(self.id),
        );
        html! {
            template id=(template_id) data-suspense=(state) { (content) }
            script { (PreEscaped(swap)) }
        }
    }

    /// Stream `head`, the pending boundary, then (after `content` resolves) the
    /// resolved boundary followed by `tail`. A failed `content` is logged and
    /// rendered as the failure notice; the stream itself never errors.
    pub fn stream<F>(
        self,
        head: String,
        content: F,
        tail: String,
    ) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static
    where
        F: Future<Output = ApplicationResult<Markup>> + Send + 'static,
    {
        let first = format!("{head}{}", self.render(&BoundaryState::Pending).into_string());

        let rest = async move {
            let state = match content.await {
                Ok(markup) => BoundaryState::Loaded(markup),
                Err(err) => {
                    tracing::error!(error = %err, boundary = %self.id, "suspense content failed");
                    BoundaryState::Failed
                }
            };
            Ok::<_, Infallible>(Bytes::from(format!("{}{tail}", self.render(&state).into_string())))
        };

        stream::once(future::ready(Ok::<_, Infallible>(Bytes::from(first)))).chain(stream::once(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use tokio::sync::oneshot;

    fn boundary() -> SuspenseBoundary {
        SuspenseBoundary::new(
            "table",
            html! { div { "Loading..." } },
            html! { div role="alert" { "oops" } },
        )
    }

    fn text(chunk: Option<Result<Bytes, Infallible>>) -> String {
        match chunk {
            Some(Ok(bytes)) => String::from_utf8(bytes.to_vec()).unwrap(),
            Some(Err(never)) => match never {},
            None => panic!("stream ended early"),
        }
    }

    #[test]
    fn pending_state_shows_fallback() {
        assert_eq!(
            boundary().render(&BoundaryState::Pending).into_string(),
            r#"<div id="table" data-suspense="pending"><div>Loading...</div></div>"#
        );
    }

    #[tokio::test]
    async fn placeholder_is_emitted_before_content_resolves() {
        let (tx, rx) = oneshot::channel::<Markup>();
        let content = async move {
            rx.await
                .map_err(|_| ApplicationError::infrastructure("sender dropped"))
        };
        let mut body = Box::pin(boundary().stream("<main>".into(), content, "</main>".into()));

        let first = text(body.next().await);
        assert_eq!(first, r#"<main><div id="table" data-suspense="pending"><div>Loading...</div></div>"#);

        tx.send(html! { table {} }).unwrap();
        let second = text(body.next().await);
        assert!(second.contains(r#"<template id="table-content" data-suspense="loaded"><table></table></template>"#));
        assert!(second.contains(r#"document.getElementById("table-content")"#));
        assert!(second.ends_with("</script></main>"));
        assert!(body.next().await.is_none());
    }

    #[tokio::test]
    async fn failed_content_renders_failure_notice() {
        let content = async { Err(ApplicationError::infrastructure("db down")) };
        let chunks: Vec<_> = boundary()
            .stream(String::new(), content, String::new())
            .collect()
            .await;
        let second = text(chunks.into_iter().nth(1));
        assert!(second.contains("data-suspense=\"failed\""));
        assert!(second.contains("oops"));
        assert!(!second.contains("db down"));
    }
}
