//! Per-variant layouts. Every layout emits the same text leaves in the same
//! order; only tags, classes and wrappers differ.

use crate::invoice::{format_money, InvoiceDocument, Totals, DEFAULT_CURRENCY_SYMBOL};

use super::tree::Node;

/// Class names for the pieces every layout shares
struct Palette {
    root: &'static str,
    header: &'static str,
    company_name: &'static str,
    header_muted: &'static str,
    title: &'static str,
    section: &'static str,
    label: &'static str,
    client_name: &'static str,
    muted: &'static str,
    table: &'static str,
    head_row: &'static str,
    head_cell: &'static str,
    row: &'static str,
    cell: &'static str,
    total_cell: &'static str,
    placeholder: &'static str,
    totals: &'static str,
    discount: &'static str,
    grand_total: &'static str,
    footer: &'static str,
}

const MINIMAL: Palette = Palette {
    root: "bg-white p-8 rounded-lg shadow-sm border text-black",
    header: "flex justify-between items-start mb-8",
    company_name: "text-2xl font-bold text-gray-800",
    header_muted: "text-gray-600 text-sm whitespace-pre-line mt-2",
    title: "text-xl font-semibold text-gray-800",
    section: "mb-6",
    label: "text-sm font-semibold text-gray-700 mb-2",
    client_name: "font-medium",
    muted: "text-gray-600 mt-1",
    table: "w-full text-sm",
    head_row: "border-b border-gray-200",
    head_cell: "py-2 font-semibold text-gray-700",
    row: "border-b border-gray-100",
    cell: "py-3 text-gray-600",
    total_cell: "py-3 text-right font-medium text-gray-800",
    placeholder: "py-8 text-center text-gray-400",
    totals: "w-64",
    discount: "text-green-600",
    grand_total: "text-gray-800",
    footer: "border-t pt-4 space-y-3",
};

const MODERN: Palette = Palette {
    root: "bg-gradient-to-br from-blue-50 to-purple-50 p-8 rounded-lg text-black",
    header: "bg-gradient-to-r from-blue-600 to-purple-600 text-white p-6 rounded-lg mb-6",
    company_name: "text-2xl font-bold",
    header_muted: "text-blue-100 text-sm mt-2 whitespace-pre-line",
    title: "text-xl font-semibold",
    section: "bg-white p-4 rounded-lg shadow-sm mb-6",
    label: "text-sm font-semibold text-blue-600 mb-2",
    client_name: "font-medium text-gray-800",
    muted: "text-gray-600 mt-1",
    table: "w-full text-sm bg-white rounded-lg shadow-sm overflow-hidden",
    head_row: "bg-gradient-to-r from-blue-50 to-purple-50",
    head_cell: "py-3 px-4 font-semibold text-gray-700",
    row: "border-b border-gray-100",
    cell: "py-3 px-4 text-gray-600",
    total_cell: "py-3 px-4 text-right font-medium text-gray-800",
    placeholder: "py-8 text-center text-gray-400",
    totals: "w-64 bg-white p-4 rounded-lg shadow-sm",
    discount: "text-green-600",
    grand_total: "text-blue-600",
    footer: "bg-white p-4 rounded-lg shadow-sm space-y-3",
};

const CORPORATE: Palette = Palette {
    root: "bg-white p-8 rounded-lg border-2 border-gray-800 text-black",
    header: "bg-gray-800 text-white p-6 -m-8 mb-6 rounded-t-lg",
    company_name: "text-2xl font-bold",
    header_muted: "text-gray-300 text-sm mt-2 whitespace-pre-line",
    title: "text-xl font-bold",
    section: "mb-6",
    label: "text-sm font-bold text-gray-800 mb-2 uppercase tracking-wide",
    client_name: "font-bold text-gray-800",
    muted: "text-gray-600 mt-1 font-medium",
    table: "w-full text-sm border-2 border-gray-800",
    head_row: "bg-gray-800 text-white",
    head_cell: "py-3 px-3 font-bold",
    row: "border-b border-gray-200",
    cell: "py-3 px-3 text-gray-600",
    total_cell: "py-3 px-3 text-right font-bold text-gray-800",
    placeholder: "py-8 text-center text-gray-400",
    totals: "w-64 border-2 border-gray-800 p-4",
    discount: "text-green-600",
    grand_total: "text-gray-800",
    footer: "border-t-2 border-gray-800 pt-4 space-y-3",
};

const ELEGANT: Palette = Palette {
    root: "bg-gradient-to-b from-rose-50 to-pink-50 p-10 rounded-lg font-serif text-black",
    header: "text-center border-b border-rose-200 pb-6 mb-8",
    company_name: "text-3xl font-serif italic text-rose-700",
    header_muted: "text-rose-400 text-sm mt-2 whitespace-pre-line",
    title: "text-lg tracking-widest text-rose-600 mt-4",
    section: "mb-6 pl-4 border-l-2 border-rose-200",
    label: "text-xs italic text-rose-500 mb-2",
    client_name: "font-serif text-gray-800",
    muted: "text-gray-500 mt-1",
    table: "w-full text-sm font-serif",
    head_row: "border-b border-rose-300",
    head_cell: "py-2 italic text-rose-600",
    row: "border-b border-rose-100",
    cell: "py-3 text-gray-600",
    total_cell: "py-3 text-right text-gray-800",
    placeholder: "py-8 text-center italic text-rose-300",
    totals: "w-64 border-t border-rose-300 pt-2",
    discount: "text-rose-500",
    grand_total: "text-rose-700",
    footer: "border-t border-rose-200 pt-4 space-y-3 italic",
};

const CREATIVE: Palette = Palette {
    root: "bg-gradient-to-r from-yellow-50 via-orange-50 to-red-50 p-8 rounded-xl text-black",
    header: "flex justify-between items-start mb-8 pl-4 border-l-8 border-orange-500",
    company_name: "text-3xl font-black text-orange-600",
    header_muted: "text-orange-400 text-sm mt-2 whitespace-pre-line",
    title: "text-2xl font-black text-orange-500 -rotate-2",
    section: "bg-white/70 p-4 rounded-xl mb-6",
    label: "text-sm font-bold text-orange-500 mb-2",
    client_name: "font-bold text-gray-800",
    muted: "text-gray-600 mt-1",
    table: "w-full text-sm bg-white/70 rounded-xl overflow-hidden",
    head_row: "bg-orange-500 text-white",
    head_cell: "py-3 px-4 font-bold",
    row: "border-b border-orange-100",
    cell: "py-3 px-4 text-gray-600",
    total_cell: "py-3 px-4 text-right font-bold text-orange-600",
    placeholder: "py-8 text-center text-orange-300",
    totals: "w-64 bg-white/70 p-4 rounded-xl",
    discount: "text-green-600",
    grand_total: "text-orange-600",
    footer: "bg-white/70 p-4 rounded-xl space-y-3",
};

const TECH: Palette = Palette {
    root: "bg-gradient-to-br from-cyan-50 to-blue-50 p-8 rounded-lg font-mono text-black",
    header: "flex justify-between items-start mb-8 pb-4 border-b-2 border-cyan-500",
    company_name: "text-2xl font-bold text-cyan-700",
    header_muted: "text-cyan-600 text-xs mt-2 whitespace-pre-line",
    title: "text-xl font-bold text-cyan-600",
    section: "mb-6 p-4 border border-cyan-200 rounded",
    label: "text-xs font-bold text-cyan-600 mb-2 uppercase",
    client_name: "font-bold text-gray-800",
    muted: "text-gray-600 mt-1",
    table: "w-full text-xs border border-cyan-200",
    head_row: "bg-cyan-600 text-white",
    head_cell: "py-2 px-3 font-bold uppercase",
    row: "border-b border-cyan-100",
    cell: "py-2 px-3 text-gray-600",
    total_cell: "py-2 px-3 text-right font-bold text-cyan-700",
    placeholder: "py-8 text-center text-cyan-300",
    totals: "w-64 border border-cyan-200 p-3",
    discount: "text-green-600",
    grand_total: "text-cyan-700",
    footer: "border-t border-cyan-200 pt-4 space-y-3 text-xs",
};

/// Read-only view shared by all section builders
pub(super) struct Ctx<'a> {
    doc: &'a InvoiceDocument,
    totals: &'a Totals,
    symbol: &'a str,
}

impl<'a> Ctx<'a> {
    pub(super) fn new(doc: &'a InvoiceDocument, totals: &'a Totals) -> Self {
        let symbol = match doc.metadata.currency_symbol.as_str() {
            "" => DEFAULT_CURRENCY_SYMBOL,
            s => s,
        };
        Self { doc, totals, symbol }
    }

    fn money(&self, value: f64) -> String {
        format_money(value, self.symbol)
    }
}

fn or_placeholder<'s>(value: &'s str, placeholder: &'s str) -> &'s str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn company_block(ctx: &Ctx, p: &Palette) -> Node {
    let meta = &ctx.doc.metadata;
    let mut children = Vec::new();
    if !meta.company_logo.is_empty() {
        children.push(
            Node::el("img", "h-12 mb-2 object-contain", vec![])
                .with_attr("src", meta.company_logo.as_str())
                .with_attr("alt", "Company logo"),
        );
    }
    children.push(Node::leaf(
        "h1",
        p.company_name,
        or_placeholder(&meta.company_name, "Your Company"),
    ));
    children.push(Node::leaf(
        "div",
        p.header_muted,
        or_placeholder(&meta.company_address, "Your Company Address"),
    ));
    if !meta.company_tax_id.is_empty() {
        children.push(Node::leaf(
            "div",
            p.header_muted,
            format!("Tax ID: {}", meta.company_tax_id),
        ));
    }
    Node::el("div", "", children)
}

fn invoice_block(ctx: &Ctx, p: &Palette, align: &str) -> Node {
    let meta = &ctx.doc.metadata;
    let mut dates = vec![
        Node::leaf("div", "", format!("#{}", meta.invoice_number)),
        Node::leaf("div", "", format!("Date: {}", meta.issue_date)),
    ];
    if !meta.due_date.is_empty() {
        dates.push(Node::leaf("div", "", format!("Due: {}", meta.due_date)));
    }
    Node::el(
        "div",
        align,
        vec![
            Node::leaf("h2", p.title, "INVOICE"),
            Node::el("div", p.header_muted, dates),
        ],
    )
}

fn header(ctx: &Ctx, p: &Palette) -> Node {
    Node::el(
        "header",
        p.header,
        vec![company_block(ctx, p), invoice_block(ctx, p, "text-right")],
    )
}

fn bill_to(ctx: &Ctx, p: &Palette) -> Node {
    let meta = &ctx.doc.metadata;
    let mut client = vec![
        Node::leaf(
            "div",
            p.client_name,
            or_placeholder(&meta.client_name, "Client Name"),
        ),
        Node::leaf(
            "div",
            p.muted,
            or_placeholder(&meta.client_address, "Client Address"),
        ),
    ];
    if !meta.client_tax_id.is_empty() {
        client.push(Node::leaf(
            "div",
            p.muted,
            format!("Tax ID: {}", meta.client_tax_id),
        ));
    }
    Node::el(
        "section",
        p.section,
        vec![
            Node::leaf("div", p.label, "Bill To:"),
            Node::el("div", "text-sm", client),
        ],
    )
}

fn items_table(ctx: &Ctx, p: &Palette) -> Node {
    let heading = |label: &str, align: &str| {
        Node::leaf("th", &format!("{align} {}", p.head_cell), label)
    };
    let head = Node::el(
        "thead",
        "",
        vec![Node::el(
            "tr",
            p.head_row,
            vec![
                heading("Description", "text-left"),
                heading("Qty", "text-center"),
                heading("Rate", "text-right"),
                heading("Tax%", "text-right"),
                heading("Total", "text-right"),
            ],
        )],
    );

    let rows: Vec<Node> = if ctx.doc.items.is_empty() {
        vec![Node::el(
            "tr",
            "",
            vec![Node::leaf("td", p.placeholder, "No items added yet").with_attr("colspan", "5")],
        )]
    } else {
        ctx.doc
            .items
            .iter()
            .map(|item| {
                Node::el(
                    "tr",
                    p.row,
                    vec![
                        Node::leaf(
                            "td",
                            p.cell,
                            or_placeholder(&item.description, "Item description"),
                        ),
                        Node::leaf("td", &format!("text-center {}", p.cell), item.quantity.to_string()),
                        Node::leaf("td", &format!("text-right {}", p.cell), ctx.money(item.rate)),
                        Node::leaf("td", &format!("text-right {}", p.cell), format!("{}%", item.tax_rate)),
                        Node::leaf("td", p.total_cell, ctx.money(item.line_total)),
                    ],
                )
                .with_attr("data-item-id", item.id.as_str())
            })
            .collect()
    };

    Node::el(
        "section",
        "mb-6",
        vec![Node::el(
            "table",
            p.table,
            vec![head, Node::el("tbody", "", rows)],
        )],
    )
}

fn totals_block(ctx: &Ctx, p: &Palette) -> Node {
    let line = |label: String, value: String, class: &str| {
        Node::el(
            "div",
            &format!("flex justify-between py-1 text-sm {class}"),
            vec![Node::leaf("span", "", label), Node::leaf("span", "", value)],
        )
    };

    let mut lines = vec![
        line("Subtotal:".into(), ctx.money(ctx.totals.subtotal), ""),
        line("Tax:".into(), ctx.money(ctx.totals.total_tax), ""),
    ];
    if ctx.doc.discount_percent > 0.0 {
        lines.push(line(
            format!("Discount ({}%):", ctx.doc.discount_percent),
            format!("-{}", ctx.money(ctx.totals.discount_amount)),
            p.discount,
        ));
    }
    lines.push(line(
        "Total:".into(),
        ctx.money(ctx.totals.grand_total),
        &format!("border-t pt-2 font-bold {}", p.grand_total),
    ));

    Node::el(
        "section",
        "flex justify-end mb-6",
        vec![Node::el("div", p.totals, lines)],
    )
}

fn notes_and_terms(ctx: &Ctx, p: &Palette) -> Option<Node> {
    let meta = &ctx.doc.metadata;
    let block = |label: &str, body: &str| {
        Node::el(
            "div",
            "",
            vec![
                Node::leaf("div", p.label, label),
                Node::leaf("div", "text-sm text-gray-600 whitespace-pre-line", body),
            ],
        )
    };

    let mut blocks = Vec::new();
    if !meta.notes.is_empty() {
        blocks.push(block("Notes:", &meta.notes));
    }
    if !meta.terms.is_empty() {
        blocks.push(block("Terms & Conditions:", &meta.terms));
    }
    if blocks.is_empty() {
        None
    } else {
        Some(Node::el("footer", p.footer, blocks))
    }
}

fn body(ctx: &Ctx, p: &Palette, mut head: Vec<Node>) -> Vec<Node> {
    head.push(bill_to(ctx, p));
    head.push(items_table(ctx, p));
    head.push(totals_block(ctx, p));
    head.extend(notes_and_terms(ctx, p));
    head
}

fn root(p: &Palette, children: Vec<Node>) -> Node {
    Node::el("article", p.root, children)
}

pub(super) fn minimal(ctx: &Ctx) -> Node {
    let p = &MINIMAL;
    root(p, body(ctx, p, vec![header(ctx, p)]))
}

pub(super) fn modern(ctx: &Ctx) -> Node {
    let p = &MODERN;
    let band = Node::el(
        "div",
        p.header,
        vec![Node::el(
            "header",
            "flex justify-between items-start",
            vec![company_block(ctx, p), invoice_block(ctx, p, "text-right")],
        )],
    );
    root(p, body(ctx, p, vec![band]))
}

pub(super) fn corporate(ctx: &Ctx) -> Node {
    let p = &CORPORATE;
    let band = Node::el(
        "div",
        p.header,
        vec![Node::el(
            "header",
            "flex justify-between items-start",
            vec![company_block(ctx, p), invoice_block(ctx, p, "text-right")],
        )],
    );
    root(p, body(ctx, p, vec![band]))
}

pub(super) fn elegant(ctx: &Ctx) -> Node {
    let p = &ELEGANT;
    let centered = Node::el(
        "header",
        p.header,
        vec![company_block(ctx, p), invoice_block(ctx, p, "text-center")],
    );
    root(p, body(ctx, p, vec![centered]))
}

pub(super) fn creative(ctx: &Ctx) -> Node {
    let p = &CREATIVE;
    let stripe = Node::el(
        "div",
        "h-2 -mx-8 -mt-8 mb-6 rounded-t-xl bg-gradient-to-r from-yellow-400 via-orange-500 to-red-500",
        vec![],
    );
    root(p, body(ctx, p, vec![stripe, header(ctx, p)]))
}

pub(super) fn tech(ctx: &Ctx) -> Node {
    let p = &TECH;
    let grid = Node::el(
        "div",
        "grid grid-cols-[auto_1fr] gap-4",
        vec![
            Node::el("div", "w-1 bg-cyan-500 rounded", vec![]),
            Node::el("div", "", body(ctx, p, vec![header(ctx, p)])),
        ],
    );
    root(p, vec![grid])
}
