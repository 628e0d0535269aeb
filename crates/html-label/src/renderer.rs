//! Keeps a label's composed HTML in sync with its properties.
//!
//! A host view (web view, rich text control) displays the HTML produced by
//! an [`HtmlLabelRenderer`]. The renderer composes it once when attached and
//! again whenever the label reports a change to a property that affects it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use html_label::{HtmlLabel, HtmlLabelRenderer};
//! use html_label_style::prelude::*;
//!
//! let label = Arc::new(HtmlLabel::new("Hello"));
//! let renderer = HtmlLabelRenderer::attach(label.clone(), SystemFontMetrics);
//!
//! renderer.html_changed().connect(|html| {
//!     println!("new html: {html:?}");
//! });
//!
//! label.set_horizontal_text_alignment(TextAlignment::Center);
//! assert!(renderer.html().unwrap().contains("text-align:center"));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use html_label_core::logging::targets;
use html_label_core::{ConnectionId, Property, Signal};
use html_label_style::composer::FontMetrics;
use html_label_style::properties::is_relevant_property;

use crate::label::HtmlLabel;

/// State shared between the renderer and its `property_changed` slot.
struct RenderState {
    metrics: Box<dyn FontMetrics + Send + Sync>,
    html: Property<Option<String>>,
    html_changed: Signal<Option<String>>,
    render_count: AtomicU64,
}

impl RenderState {
    fn render(&self, label: &HtmlLabel) {
        let html = label.to_html(&*self.metrics);
        let render_count = self.render_count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(
            target: targets::RENDERER,
            render_count,
            empty = html.is_none(),
            "rendered label"
        );

        if self.html.set(html.clone()) {
            self.html_changed.emit(html);
        }
    }
}

/// Renders an [`HtmlLabel`] and re-renders it on relevant property changes.
///
/// Dropping the renderer disconnects it from the label.
pub struct HtmlLabelRenderer {
    label: Arc<HtmlLabel>,
    state: Arc<RenderState>,
    connection: ConnectionId,
}

impl HtmlLabelRenderer {
    /// Attach a renderer to `label` and compose its HTML immediately.
    pub fn attach<M>(label: Arc<HtmlLabel>, metrics: M) -> Self
    where
        M: FontMetrics + Send + Sync + 'static,
    {
        let state = Arc::new(RenderState {
            metrics: Box::new(metrics),
            html: Property::new(None),
            html_changed: Signal::new(),
            render_count: AtomicU64::new(0),
        });
        state.render(&label);

        // The slot lives inside the label, so it must not keep the label alive.
        let weak_label: Weak<HtmlLabel> = Arc::downgrade(&label);
        let slot_state = state.clone();
        let connection = label.property_changed.connect(move |&property| {
            if !is_relevant_property(property) {
                tracing::trace!(target: targets::RENDERER, property, "ignoring property change");
                return;
            }
            if let Some(label) = weak_label.upgrade() {
                slot_state.render(&label);
            }
        });

        Self {
            label,
            state,
            connection,
        }
    }

    /// The label being rendered.
    pub fn label(&self) -> &Arc<HtmlLabel> {
        &self.label
    }

    /// The current HTML, or `None` while the text is blank.
    pub fn html(&self) -> Option<String> {
        self.state.html.get()
    }

    /// Signal emitted with the new HTML whenever it changes.
    pub fn html_changed(&self) -> &Signal<Option<String>> {
        &self.state.html_changed
    }

    /// Number of times the HTML has been composed.
    pub fn render_count(&self) -> u64 {
        self.state.render_count.load(Ordering::SeqCst)
    }

    /// Compose the HTML again regardless of what changed.
    pub fn refresh(&self) {
        self.state.render(&self.label);
    }
}

impl Drop for HtmlLabelRenderer {
    fn drop(&mut self) {
        self.label.property_changed.disconnect(self.connection);
    }
}

impl fmt::Debug for HtmlLabelRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlLabelRenderer")
            .field("html", &self.html())
            .field("render_count", &self.render_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_label_style::composer::SystemFontMetrics;
    use html_label_style::types::{Color, TextAlignment};
    use parking_lot::Mutex;

    use crate::navigation::BrowserLaunchOptions;

    #[test]
    fn test_renders_on_attach() {
        let label = Arc::new(HtmlLabel::new("Hello"));
        let renderer = HtmlLabelRenderer::attach(label, SystemFontMetrics);

        assert_eq!(renderer.render_count(), 1);
        assert!(renderer.html().unwrap().ends_with(">Hello</div>"));
    }

    #[test]
    fn test_relevant_change_rerenders() {
        let label = Arc::new(HtmlLabel::new("Hello"));
        let renderer = HtmlLabelRenderer::attach(label.clone(), SystemFontMetrics);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        renderer.html_changed().connect(move |html| {
            seen_clone.lock().push(html.clone());
        });

        label.set_text_color(Some(Color::RED));
        assert_eq!(renderer.render_count(), 2);
        assert_eq!(seen.lock().len(), 1);
        assert!(renderer.html().unwrap().contains("color:rgba(255,0,0,1)"));
    }

    #[test]
    fn test_irrelevant_change_is_ignored() {
        let label = Arc::new(HtmlLabel::new("Hello"));
        let renderer = HtmlLabelRenderer::attach(label.clone(), SystemFontMetrics);

        label.set_browser_launch_options(Some(BrowserLaunchOptions::new()));
        assert_eq!(renderer.render_count(), 1);
    }

    #[test]
    fn test_blank_text_clears_html() {
        let label = Arc::new(HtmlLabel::new("Hello"));
        let renderer = HtmlLabelRenderer::attach(label.clone(), SystemFontMetrics);

        label.set_text("  ");
        assert_eq!(renderer.html(), None);

        label.set_text("Back");
        assert!(renderer.html().is_some());
    }

    #[test]
    fn test_drop_disconnects() {
        let label = Arc::new(HtmlLabel::new("Hello"));
        let renderer = HtmlLabelRenderer::attach(label.clone(), SystemFontMetrics);
        assert_eq!(label.property_changed.connection_count(), 1);

        drop(renderer);
        assert_eq!(label.property_changed.connection_count(), 0);
        label.set_horizontal_text_alignment(TextAlignment::End);
    }
}
