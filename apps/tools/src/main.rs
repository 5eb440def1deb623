use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::{anyhow, Context, Result};
use catalog::CatalogSource;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use session_core::Session;
use shared::{
    domain::OrderStatus,
    i18n::{arrival_label, items_label, pieces_label, price_label},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    /// JSON catalog fixture; the built-in demo data is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Products,
    Orders {
        #[arg(long)]
        status: Option<String>,
    },
    Scan {
        barcode: String,
    },
    Deliveries,
}

/// How a command finished; a scan miss maps to a failing exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    NotFound,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::NotFound => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = catalog::open(cli.catalog.as_deref())
        .inspect_err(|err| tracing::error!(code = ?err.code(), %err, "catalog unavailable"))
        .context("failed to open catalog")?;

    let status = run(
        &cli,
        catalog.as_ref(),
        Local::now().date_naive(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    Ok(status.into())
}

fn run(
    cli: &Cli,
    catalog: &dyn CatalogSource,
    today: NaiveDate,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status> {
    match &cli.command {
        Command::Products => {
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(catalog.products())?)?;
            } else {
                for p in catalog.products() {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}\t{}\t{}",
                        p.id,
                        p.barcode,
                        p.name,
                        price_label(p.price),
                        pieces_label(p.stock.into()),
                        p.category
                    )?;
                }
            }
        }
        Command::Orders { status } => {
            let orders = match status {
                Some(raw) => {
                    let status = OrderStatus::parse(raw)
                        .ok_or_else(|| anyhow!("unknown order status '{raw}'"))?;
                    catalog.filter_orders(status)
                }
                None => catalog.orders().to_vec(),
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&orders)?)?;
            } else {
                for o in &orders {
                    writeln!(
                        out,
                        "{}\t{}\t{}\t{}",
                        o.id,
                        o.customer,
                        items_label(o.items.into()),
                        o.status
                    )?;
                }
            }
        }
        Command::Scan { barcode } => {
            let mut session = Session::new(catalog);
            match session.scan(barcode) {
                Ok(product) if cli.json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&product)?)?;
                }
                Ok(product) => {
                    writeln!(out, "{} [{}]", product.name, product.category)?;
                    writeln!(out, "Артикул: {}", product.barcode)?;
                    writeln!(
                        out,
                        "Цена: {}  Остаток: {}",
                        price_label(product.price),
                        pieces_label(product.stock.into())
                    )?;
                }
                Err(miss) => {
                    if cli.json {
                        let body = serde_json::json!({
                            "code": miss.code(),
                            "barcode": miss.barcode(),
                            "message": miss.notice(),
                        });
                        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
                    }
                    writeln!(err, "{}", miss.notice())?;
                    return Ok(Status::NotFound);
                }
            }
        }
        Command::Deliveries => {
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(catalog.deliveries())?)?;
            } else {
                for d in catalog.deliveries() {
                    writeln!(
                        out,
                        "Коробка #{}\t{}\t{}",
                        d.box_number,
                        items_label(d.item_count.into()),
                        arrival_label(d.received_on, today)
                    )?;
                }
            }
        }
    }

    Ok(Status::Success)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
