use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

use invoice_preview::catalog::{
    filter_templates, search_clients, search_invoices, summarize, Favorites, InvoiceStatus,
    ALL_CATEGORIES,
};
use invoice_preview::config::{
    config_dir, load_clients, load_config_or_default, load_draft, load_invoices, save_draft,
    CLIENTS_TEMPLATE, CONFIG_TEMPLATE, INVOICES_TEMPLATE,
};
use invoice_preview::invoice::{format_money, group_digits, DEFAULT_CURRENCY_SYMBOL};
use invoice_preview::render::{to_html, to_json, to_text};
use invoice_preview::{render, Draft, InvoiceError, ItemId, ItemUpdate, Result, TemplateVariant};

#[derive(Parser)]
#[command(name = "invoice-preview")]
#[command(version, about = "Invoice totals and multi-template previews", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config or ~/.invoice-preview)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with template files
    Init,

    /// Start a new invoice draft
    New {
        /// Draft file to create
        file: PathBuf,

        /// Template id (default: from config.toml)
        #[arg(short, long)]
        template: Option<String>,

        /// Client identifier from clients.toml
        #[arg(short, long)]
        client: Option<String>,

        /// Overwrite an existing draft file
        #[arg(long)]
        force: bool,
    },

    /// Add, edit or remove line items in a draft
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Set the discount percentage applied to the subtotal
    Discount {
        file: PathBuf,

        /// Percent, e.g. 10 for 10%
        percent: String,
    },

    /// Show subtotal, tax, discount and total for a draft
    Totals { file: PathBuf },

    /// Render a draft in one of the templates
    Preview {
        file: PathBuf,

        /// Template id (default: the draft's template)
        #[arg(short, long)]
        template: Option<String>,

        /// Output format: html, json or text
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List invoice templates
    Templates {
        /// Only show this category (e.g., Corporate)
        #[arg(long)]
        category: Option<String>,
    },

    /// List configured clients
    Clients {
        /// Match name or email
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// List issued invoices
    Invoices {
        /// Match client name or invoice number
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter by status (paid, pending, overdue, draft)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show dashboard summary
    Status,
}

#[derive(Subcommand)]
enum ItemAction {
    /// Append a line item
    Add {
        file: PathBuf,
        #[command(flatten)]
        fields: ItemFields,
    },

    /// Change fields of a line item
    Set {
        file: PathBuf,

        /// Item id as printed by 'item add' or 'totals'
        id: String,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Remove a line item
    Remove { file: PathBuf, id: String },
}

#[derive(clap::Args)]
struct ItemFields {
    #[arg(short, long)]
    description: Option<String>,

    #[arg(short, long)]
    quantity: Option<String>,

    #[arg(short, long)]
    rate: Option<String>,

    /// Tax rate in percent
    #[arg(short, long)]
    tax: Option<String>,
}

impl ItemFields {
    /// Validate numeric entry and turn the given fields into typed updates
    fn into_updates(self) -> Result<Vec<ItemUpdate>> {
        let mut updates = Vec::new();
        if let Some(d) = self.description {
            updates.push(ItemUpdate::Description(d));
        }
        if let Some(q) = self.quantity {
            updates.push(ItemUpdate::Quantity(parse_number("quantity", &q)?));
        }
        if let Some(r) = self.rate {
            updates.push(ItemUpdate::Rate(parse_number("rate", &r)?));
        }
        if let Some(t) = self.tax {
            updates.push(ItemUpdate::TaxRate(parse_number("tax rate", &t)?));
        }
        Ok(updates)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls
/// keep the subscriber that is already installed.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::New {
            file,
            template,
            client,
            force,
        } => cmd_new(&cfg_dir, &file, template.as_deref(), client.as_deref(), force),
        Commands::Item { action } => match action {
            ItemAction::Add { file, fields } => cmd_item_add(&file, fields),
            ItemAction::Set { file, id, fields } => cmd_item_set(&file, &id, fields),
            ItemAction::Remove { file, id } => cmd_item_remove(&file, &id),
        },
        Commands::Discount { file, percent } => cmd_discount(&file, &percent),
        Commands::Totals { file } => cmd_totals(&file),
        Commands::Preview {
            file,
            template,
            format,
            output,
        } => cmd_preview(&file, template.as_deref(), &format, output),
        Commands::Templates { category } => cmd_templates(&cfg_dir, category.as_deref()),
        Commands::Clients { search } => cmd_clients(&cfg_dir, &search),
        Commands::Invoices { search, status } => cmd_invoices(&cfg_dir, &search, status.as_deref()),
        Commands::Status => cmd_status(&cfg_dir),
    }
}

/// Coerce typed entry to a finite number before it reaches the calculator
fn parse_number(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvoiceError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    if cfg_dir.exists() {
        return Err(InvoiceError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    fs::write(cfg_dir.join("clients.toml"), CLIENTS_TEMPLATE)?;
    fs::write(cfg_dir.join("invoices.toml"), INVOICES_TEMPLATE)?;

    println!("Initialized invoice-preview config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your company details:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!(
        "  2. Add your clients:           $EDITOR {}/clients.toml",
        cfg_dir.display()
    );
    println!();
    println!("Then start your first draft:");
    println!("  invoice-preview new draft.toml --client <client-id>");

    Ok(())
}

/// Start a new draft
fn cmd_new(
    cfg_dir: &Path,
    file: &Path,
    template: Option<&str>,
    client_id: Option<&str>,
    force: bool,
) -> Result<()> {
    if file.exists() && !force {
        return Err(InvoiceError::DraftExists(file.to_path_buf()));
    }

    let config = load_config_or_default(cfg_dir)?;
    let client = match client_id {
        Some(id) => {
            if !cfg_dir.exists() {
                return Err(InvoiceError::ConfigNotFound(cfg_dir.to_path_buf()));
            }
            let clients = load_clients(cfg_dir)?;
            let found = clients
                .into_iter()
                .find(|c| c.id == id)
                .ok_or_else(|| InvoiceError::ClientNotFound(id.to_string()))?;
            Some(found)
        }
        None => None,
    };

    let today = chrono::Local::now().date_naive();
    let mut draft = Draft::seeded(&config, client.as_ref(), today);
    if let Some(t) = template {
        draft.template = t.parse()?;
    }

    save_draft(file, &draft)?;

    println!("Created {}", file.display());
    println!("  Invoice:  {}", draft.document.metadata.invoice_number);
    println!("  Template: {}", draft.template);
    if let Some(client) = client {
        println!("  Client:   {}", client.name);
    }

    Ok(())
}

fn cmd_item_add(file: &Path, fields: ItemFields) -> Result<()> {
    let updates = fields.into_updates()?;
    let mut draft = load_draft(file)?;

    let id = draft.document.add_item();
    for update in updates {
        draft.document.update_item(&id, update);
    }
    save_draft(file, &draft)?;

    println!("Added item {id}");
    Ok(())
}

fn cmd_item_set(file: &Path, id: &str, fields: ItemFields) -> Result<()> {
    let updates = fields.into_updates()?;
    let mut draft = load_draft(file)?;
    let id = ItemId::from(id);

    if draft.document.item(&id).is_none() {
        return Err(InvoiceError::ItemNotFound(id.to_string()));
    }
    for update in updates {
        draft.document.update_item(&id, update);
    }
    save_draft(file, &draft)?;

    if let Some(item) = draft.document.item(&id) {
        let sym = match draft.document.metadata.currency_symbol.as_str() {
            "" => DEFAULT_CURRENCY_SYMBOL,
            s => s,
        };
        println!("Updated item {} (total {})", id, format_money(item.line_total, sym));
    }
    Ok(())
}

fn cmd_item_remove(file: &Path, id: &str) -> Result<()> {
    let mut draft = load_draft(file)?;
    let id = ItemId::from(id);

    draft
        .document
        .remove_item(&id)
        .ok_or_else(|| InvoiceError::ItemNotFound(id.to_string()))?;
    save_draft(file, &draft)?;

    println!("Removed item {id}");
    Ok(())
}

fn cmd_discount(file: &Path, percent: &str) -> Result<()> {
    let percent = parse_number("discount", percent)?;
    let mut draft = load_draft(file)?;

    draft.document.discount_percent = percent;
    save_draft(file, &draft)?;

    println!("Discount set to {percent}%");
    Ok(())
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "QTY")]
    quantity: String,
    #[tabled(rename = "RATE")]
    rate: String,
    #[tabled(rename = "TAX%")]
    tax: String,
    #[tabled(rename = "TOTAL")]
    total: String,
}

/// Show line items and totals for a draft
fn cmd_totals(file: &Path) -> Result<()> {
    let draft = load_draft(file)?;
    let doc = &draft.document;
    let sym = match doc.metadata.currency_symbol.as_str() {
        "" => DEFAULT_CURRENCY_SYMBOL,
        s => s,
    };
    let totals = doc.totals();

    if doc.items.is_empty() {
        println!("No items added yet");
    } else {
        let rows: Vec<LineRow> = doc
            .items
            .iter()
            .map(|item| LineRow {
                id: item.id.to_string(),
                description: item.description.clone(),
                quantity: item.quantity.to_string(),
                rate: format_money(item.rate, sym),
                tax: format!("{}%", item.tax_rate),
                total: format_money(item.line_total, sym),
            })
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }

    println!();
    println!("Subtotal:  {}", format_money(totals.subtotal, sym));
    println!("Tax:       {}", format_money(totals.total_tax, sym));
    if doc.discount_percent > 0.0 {
        println!(
            "Discount:  -{} ({}%)",
            format_money(totals.discount_amount, sym),
            doc.discount_percent
        );
    }
    println!("Total:     {}", format_money(totals.grand_total, sym));

    Ok(())
}

/// Render a draft
fn cmd_preview(
    file: &Path,
    template: Option<&str>,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let draft = load_draft(file)?;
    let variant: TemplateVariant = match template {
        Some(t) => t.parse()?,
        None => draft.template,
    };

    let totals = draft.document.totals();
    let tree = render(&draft.document, &totals, variant);
    let rendered = match format {
        "html" => to_html(&tree),
        "json" => to_json(&tree)?,
        "text" => to_text(&tree),
        other => return Err(InvoiceError::UnknownFormat(other.to_string())),
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!("Saved {} preview to {}", variant, path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "PREMIUM")]
    premium: String,
    #[tabled(rename = "RATING")]
    rating: String,
    #[tabled(rename = "DOWNLOADS")]
    downloads: u32,
    #[tabled(rename = "FAV")]
    favorite: String,
}

/// List invoice templates
fn cmd_templates(cfg_dir: &Path, category: Option<&str>) -> Result<()> {
    let config = load_config_or_default(cfg_dir)?;
    let favorites: Favorites = config.gallery.favorites.iter().copied().collect();
    let category = category.unwrap_or(ALL_CATEGORIES);

    let shown = filter_templates(category);
    if shown.is_empty() {
        println!("No templates found in category '{category}'.");
        return Ok(());
    }

    let rows: Vec<TemplateRow> = shown
        .iter()
        .map(|t| TemplateRow {
            id: t.variant.to_string(),
            name: t.name.to_string(),
            category: t.category.to_string(),
            premium: (if t.premium { "yes" } else { "" }).to_string(),
            rating: format!("{:.1}", t.rating),
            downloads: t.downloads,
            favorite: (if favorites.contains(t.variant) { "*" } else { "" }).to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "EMAIL")]
    email: String,
    #[tabled(rename = "INVOICES")]
    invoices: u32,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

/// List configured clients
fn cmd_clients(cfg_dir: &Path, term: &str) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(InvoiceError::ConfigNotFound(cfg_dir.to_path_buf()));
    }

    let config = load_config_or_default(cfg_dir)?;
    let clients = load_clients(cfg_dir)?;
    let shown = search_clients(&clients, term);

    if shown.is_empty() {
        println!("No clients found.");
        println!("Add clients to: {}/clients.toml", cfg_dir.display());
        return Ok(());
    }

    let rows: Vec<ClientRow> = shown
        .iter()
        .map(|c| ClientRow {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            invoices: c.total_invoices,
            total: format_whole_money(c.total_amount, &config.invoice.currency_symbol),
            status: c.status.to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "CLIENT")]
    client: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "DUE")]
    due_date: String,
}

/// List issued invoices
fn cmd_invoices(cfg_dir: &Path, term: &str, status: Option<&str>) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(InvoiceError::ConfigNotFound(cfg_dir.to_path_buf()));
    }

    let status: Option<InvoiceStatus> = status.map(str::parse::<InvoiceStatus>).transpose()?;
    let config = load_config_or_default(cfg_dir)?;
    let invoices = load_invoices(cfg_dir)?;
    let shown = search_invoices(&invoices, term, status);

    if shown.is_empty() {
        println!("No invoices found.");
        return Ok(());
    }

    let rows: Vec<InvoiceRow> = shown
        .iter()
        .map(|inv| InvoiceRow {
            number: inv.id.clone(),
            client: inv.client.clone(),
            amount: format_whole_money(inv.amount, &config.invoice.currency_symbol),
            status: inv.status.to_string(),
            date: inv.date.to_string(),
            due_date: inv.due_date.to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!();
    println!("{} of {} invoices", shown.len(), invoices.len());

    Ok(())
}

/// Show dashboard summary
fn cmd_status(cfg_dir: &Path) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(InvoiceError::ConfigNotFound(cfg_dir.to_path_buf()));
    }

    let config = load_config_or_default(cfg_dir)?;
    let clients = load_clients(cfg_dir)?;
    let invoices = load_invoices(cfg_dir)?;
    let summary = summarize(&invoices);
    let sym = &config.invoice.currency_symbol;

    println!("Invoice Dashboard");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    println!("Company:          {}", config.company.name);
    println!("Default template: {}", config.invoice.default_template);
    println!("Clients:          {}", clients.len());
    println!("Total invoices:   {}", summary.count);
    println!("Total revenue:    {}", format_money(summary.revenue, sym));
    println!("Outstanding:      {}", format_money(summary.outstanding, sym));
    println!(
        "Paid / Pending / Overdue / Draft: {} / {} / {} / {}",
        summary.paid, summary.pending, summary.overdue, summary.draft
    );

    let mut recent: Vec<_> = invoices.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    if !recent.is_empty() {
        println!();
        println!("Recent invoices:");
        for inv in recent.iter().take(5) {
            println!(
                "  {} - {} - {} - {}",
                inv.id,
                inv.client,
                format_money(inv.amount, sym),
                inv.status
            );
        }
    }

    Ok(())
}

fn format_whole_money(value: f64, currency_symbol: &str) -> String {
    let rounded = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && rounded != "0" { "-" } else { "" };
    let grouped = format!("{sign}{}", group_digits(&rounded));
    format!("{}{:>6}", currency_symbol, grouped)
}
