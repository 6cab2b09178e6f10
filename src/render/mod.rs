mod export;
mod layout;
mod tree;
mod variant;

pub use export::{to_html, to_json, to_text};
pub use tree::Node;
pub use variant::TemplateVariant;

use crate::invoice::{InvoiceDocument, Totals};

/// Lay out `document` and its precomputed `totals` in the given template.
///
/// Pure and idempotent: the same inputs always produce an equal tree, and
/// variants never change the figures, only their arrangement.
pub fn render(document: &InvoiceDocument, totals: &Totals, variant: TemplateVariant) -> Node {
    tracing::debug!(
        template = %variant,
        items = document.items.len(),
        "rendering invoice preview"
    );

    let ctx = layout::Ctx::new(document, totals);
    match variant {
        TemplateVariant::Minimal => layout::minimal(&ctx),
        TemplateVariant::Modern => layout::modern(&ctx),
        TemplateVariant::Corporate => layout::corporate(&ctx),
        TemplateVariant::Elegant => layout::elegant(&ctx),
        TemplateVariant::Creative => layout::creative(&ctx),
        TemplateVariant::Tech => layout::tech(&ctx),
    }
}
