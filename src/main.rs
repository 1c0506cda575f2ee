use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use receipt_processor::application::service::ReceiptService;
use receipt_processor::config::{Cli, Command, ScoreArgs};
use receipt_processor::domain::points::points_breakdown;
use receipt_processor::domain::ports::ReceiptStoreBox;
use receipt_processor::domain::receipt::Receipt;
use receipt_processor::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_processor::interfaces::http;
use receipt_processor::interfaces::json::receipt_reader::ReceiptReader;
use receipt_processor::telemetry::init_tracing;
use std::fs::File;
use std::io;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level).map_err(|e| miette!("failed to initialise logging: {e}"))?;

    match cli.command {
        Command::Serve(config) => {
            let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
            let service = Arc::new(ReceiptService::new(store));
            http::serve(config.socket_addr(), service)
                .await
                .into_diagnostic()?;
        }
        Command::Score(args) => score(&args)?,
    }

    Ok(())
}

fn score(args: &ScoreArgs) -> Result<()> {
    let read = if args.reads_stdin() {
        ReceiptReader::new(io::stdin().lock()).read()
    } else {
        let file = File::open(&args.input).into_diagnostic()?;
        ReceiptReader::new(file).read()
    };
    let receipt: Receipt = read.into_diagnostic()?;

    let breakdown = points_breakdown(&receipt).into_diagnostic()?;
    if args.breakdown {
        println!("retailer_name: {}", breakdown.retailer_name);
        println!("round_dollar_total: {}", breakdown.round_dollar_total);
        println!("quarter_multiple_total: {}", breakdown.quarter_multiple_total);
        println!("item_pairs: {}", breakdown.item_pairs);
        println!("item_descriptions: {}", breakdown.item_descriptions);
        println!("odd_purchase_day: {}", breakdown.odd_purchase_day);
        println!("afternoon_purchase: {}", breakdown.afternoon_purchase);
        println!("total: {}", breakdown.total());
    } else {
        println!("{}", breakdown.total());
    }

    Ok(())
}
