//! Flightish CLI
//!
//! Command-line access to the loan, insurance and catalogue estimators

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flightish::catalog::{filter_records, Catalog};
use flightish::format::{format_currency, truncate_text};
use flightish::insurance::{quote_plans, InsuranceQuoteRequest};
use flightish::loans::LoanQuoteRequest;
use flightish::{Currency, RateSheet, Region, RegionSettings};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flightish", version, about = "Travel loan and insurance estimators")]
struct Cli {
    /// Region whose currency prices are shown in (USA or Australia)
    #[arg(long, global = true, default_value = "USA")]
    region: Region,

    /// Override the region's display currency (USD or AUD)
    #[arg(long, global = true)]
    currency: Option<Currency>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing jobs.csv and documents.csv
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate monthly payments for a travel loan
    Loan {
        #[arg(long, default_value_t = 3000.0)]
        amount: f64,
        /// Term in months: 3, 6, 12, 18, 24 or 36
        #[arg(long, default_value_t = 12)]
        term: u32,
        /// excellent, good, fair or poor
        #[arg(long, default_value = "good")]
        credit: String,
    },
    /// Adjust a plan price for trip duration and traveler age
    Insurance {
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "4-7")]
        duration: String,
        #[arg(long, default_value = "30-39")]
        age: String,
    },
    /// Price every insurance plan for a trip
    Plans {
        #[arg(long, default_value = "4-7")]
        duration: String,
        #[arg(long, default_value = "30-39")]
        age: String,
    },
    /// Search job postings or wallet documents
    Search {
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, value_enum, default_value_t = SearchKind::Jobs)]
        kind: SearchKind,
    },
    /// Quote every band combination at once
    RateSheet {
        #[command(subcommand)]
        sheet: Sheet,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SearchKind {
    Jobs,
    Documents,
}

#[derive(Debug, Subcommand)]
enum Sheet {
    /// Monthly payment for every term and credit band
    Loan {
        #[arg(long, default_value_t = 3000.0)]
        amount: f64,
    },
    /// Adjusted premium for every duration and age band
    Premium {
        #[arg(long)]
        price: f64,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(dir) => Catalog::from_csv_path(dir)
            .with_context(|| format!("loading catalogue from {}", dir.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = RegionSettings::new(cli.region);
    if let Some(currency) = cli.currency {
        settings.set_currency(currency);
    }
    let currency = settings.currency();

    match &cli.command {
        Command::Loan { amount, term, credit } => {
            let quote = LoanQuoteRequest::parse(*amount, *term, credit)?.estimate()?;
            if cli.json {
                return print_json(&quote);
            }
            println!("Loan Estimate ({} over {} months, {} credit)", format_currency(*amount, currency), term, credit);
            println!("{}", "-".repeat(48));
            println!("  Monthly Payment: {:>14}", format_currency(quote.monthly_payment, currency));
            println!("  Interest Rate:   {:>13.1}%", quote.annual_rate_percent);
            println!("  Total Repayment: {:>14}", format_currency(quote.total_repayment, currency));
            println!("  Total Interest:  {:>14}", format_currency(quote.total_interest, currency));
        }
        Command::Insurance { price, duration, age } => {
            let quote = InsuranceQuoteRequest::parse(*price, duration, age)?.quote()?;
            if cli.json {
                return print_json(&quote);
            }
            println!(
                "Adjusted premium ({} days, age {}): {}",
                duration,
                age,
                format_currency(quote.adjusted_price, currency)
            );
        }
        Command::Plans { duration, age } => {
            let quotes = quote_plans(&settings, duration.parse()?, age.parse()?)?;
            if cli.json {
                return print_json(&quotes);
            }
            println!("Insurance plans for {} {} ({})", settings.region().flag(), settings.region(), currency);
            println!("{:<20} {:>12} {:>12}  {}", "Plan", "Base", "Your Price", "Provider");
            println!("{}", "-".repeat(72));
            for quote in &quotes {
                println!(
                    "{:<20} {:>12} {:>12}  {}",
                    quote.plan.name,
                    format_currency(quote.plan.price, currency),
                    quote.display_price,
                    quote.plan.provider,
                );
            }
            println!("\nPayment methods: {}", settings.region().payment_methods().join(", "));
        }
        Command::Search { query, category, kind } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            match kind {
                SearchKind::Jobs => {
                    let matches: Vec<_> = filter_records(&catalog.jobs, query, category).collect();
                    if cli.json {
                        return print_json(&matches);
                    }
                    for job in &matches {
                        println!(
                            "{:>3}  {:<30} {:<15} {:<20} {}",
                            job.id,
                            job.title,
                            job.department,
                            job.location,
                            truncate_text(&job.description, 40)
                        );
                    }
                    println!("\n{} position(s) found", matches.len());
                }
                SearchKind::Documents => {
                    let matches: Vec<_> = filter_records(&catalog.documents, query, category).collect();
                    if cli.json {
                        return print_json(&matches);
                    }
                    for doc in &matches {
                        println!("{:>3}  {:<32} {:<15} {}  {}", doc.id, doc.name, doc.kind, doc.date, doc.size);
                    }
                    println!("\n{} document(s) found", matches.len());
                }
            }
        }
        Command::RateSheet { sheet: Sheet::Loan { amount } } => {
            let grid = RateSheet::loan_grid(*amount)?;
            if cli.json {
                return print_json(&grid);
            }
            println!("{:>6} {:<10} {:>7} {:>14} {:>14}", "Term", "Credit", "Rate", "Payment", "Interest");
            println!("{}", "-".repeat(56));
            for row in &grid {
                println!(
                    "{:>6} {:<10} {:>6.1}% {:>14} {:>14}",
                    row.term_months,
                    row.credit_band,
                    row.quote.annual_rate_percent,
                    format_currency(row.quote.monthly_payment, currency),
                    format_currency(row.quote.total_interest, currency),
                );
            }
        }
        Command::RateSheet { sheet: Sheet::Premium { price } } => {
            let grid = RateSheet::premium_grid(*price)?;
            if cli.json {
                return print_json(&grid);
            }
            println!("{:>8} {:>6} {:>12}", "Days", "Age", "Premium");
            println!("{}", "-".repeat(28));
            for row in &grid {
                println!(
                    "{:>8} {:>6} {:>12}",
                    row.duration_band.as_str(),
                    row.age_band.as_str(),
                    format_currency(row.adjusted_price, currency)
                );
            }
        }
    }

    Ok(())
}
