//! Command-line surface: argument parsing, dispatch and output rendering

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::model::{SearchFilters, Vulnerability};
use crate::service::EuvdClient;

/// Command-line client for the ENISA EU Vulnerability Database
#[derive(Parser, Debug)]
#[command(
    name = "euvd",
    version,
    about = "Query the ENISA EU Vulnerability Database (EUVD)"
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long = "log",
        global = true,
        default_value = "info",
        value_name = "LEVEL"
    )]
    pub log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search vulnerability records by filter criteria
    Search(SearchArgs),
    /// Look up a single record by its EUVD ID
    Lookup(LookupArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Filter by assigning organization
    #[arg(long, value_name = "NAME")]
    assigner: Option<String>,

    /// Filter by vendor name
    #[arg(long, value_name = "NAME")]
    vendor: Option<String>,

    /// Filter by product name
    #[arg(long, value_name = "NAME")]
    product: Option<String>,

    /// Full-text search query
    #[arg(long, value_name = "QUERY")]
    text: Option<String>,

    /// Filter from publication date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from_date: Option<NaiveDate>,

    /// Filter to publication date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    to_date: Option<NaiveDate>,

    /// Minimum CVSS score (0-10)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=10))]
    from_score: Option<u8>,

    /// Maximum CVSS score (0-10)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=10))]
    to_score: Option<u8>,

    /// Minimum EPSS score (0-100)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    from_epss: Option<u8>,

    /// Maximum EPSS score (0-100)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    to_epss: Option<u8>,

    /// Filter by exploited status (true/false)
    #[arg(long, value_name = "BOOL")]
    exploited: Option<bool>,

    /// Pagination page number
    #[arg(long, default_value_t = 0, value_name = "N")]
    page: u32,

    /// Number of results per page
    #[arg(long, default_value_t = 100, value_name = "N")]
    size: u32,

    /// Print the decoded response as pretty JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct LookupArgs {
    /// EUVD identifier (e.g., EUVD-2025-0001)
    #[arg(value_name = "ID")]
    id: String,

    /// Print the decoded record as pretty JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = EuvdClient::new().context("failed to initialize EUVD client")?;

        match self.command {
            Command::Search(args) => search(&client, args).await,
            Command::Lookup(args) => lookup(&client, args).await,
        }
    }
}

async fn search(client: &EuvdClient, args: SearchArgs) -> anyhow::Result<()> {
    let filters = SearchFilters {
        assigner: args.assigner,
        vendor: args.vendor,
        product: args.product,
        text: args.text,
        from_date: args.from_date,
        to_date: args.to_date,
        from_score: args.from_score,
        to_score: args.to_score,
        from_epss: args.from_epss,
        to_epss: args.to_epss,
        exploited: args.exploited,
        page: args.page,
        size: args.size,
    };

    let response = client
        .search(&filters)
        .await
        .context("failed to search EUVD")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    for item in &response.items {
        print_summary(item);
    }
    println!(
        "{} of {} matching records",
        response.items.len(),
        response.total
    );

    Ok(())
}

async fn lookup(client: &EuvdClient, args: LookupArgs) -> anyhow::Result<()> {
    let record = client
        .lookup(&args.id)
        .await
        .context("failed to look up EUVD record")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    print_detail(&record);

    Ok(())
}

/// One-line rendering used for search result listings.
fn print_summary(item: &Vulnerability) {
    let vendor = item
        .enisa_id_vendor
        .first()
        .map(|v| v.vendor.name.as_str())
        .unwrap_or("-");
    let product = item
        .enisa_id_product
        .first()
        .map(|p| p.product.name.as_str())
        .unwrap_or("-");
    let reference = item.references.lines().next().unwrap_or("-");

    println!(
        "{}\tscore={}\tvendor={}\tproduct={}\tref={}",
        item.id, item.base_score, vendor, product, reference
    );
}

/// Multi-line rendering used for single-record lookups.
fn print_detail(record: &Vulnerability) {
    println!("id:          {}", record.id);
    if !record.aliases.is_empty() {
        println!(
            "aliases:     {}",
            record.aliases.lines().collect::<Vec<_>>().join(", ")
        );
    }
    if !record.assigner.is_empty() {
        println!("assigner:    {}", record.assigner);
    }
    println!("published:   {}", record.date_published);
    println!("updated:     {}", record.date_updated);
    println!(
        "score:       {} (CVSS {}) {}",
        record.base_score, record.base_score_version, record.base_score_vector
    );
    println!("epss:        {}", record.epss);

    for vendor in &record.enisa_id_vendor {
        println!("vendor:      {}", vendor.vendor.name);
    }
    for product in &record.enisa_id_product {
        match &product.product_version {
            Some(version) => println!("product:     {} {}", product.product.name, version),
            None => println!("product:     {}", product.product.name),
        }
    }

    if !record.description.is_empty() {
        println!("description: {}", record.description);
    }
    for reference in record.references.lines().filter(|r| !r.is_empty()) {
        println!("reference:   {}", reference);
    }
}
