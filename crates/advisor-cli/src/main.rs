//! Sui DeFi Advisor CLI
//!
//! Fetches a wallet's balances and objects from a fullnode (or canned mock
//! data), runs the portfolio and platform analyzers, and prints text or JSON
//! reports.

mod report;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use defi_advisor::{
    analyze_portfolio, staking_opportunities, ChainClient, MockChainClient, PlatformDetector,
    PlatformRegistry, SuiRpcClient,
};

use crate::report::{
    render_error, render_json, render_platforms_report, render_portfolio_report, FullAnalysis,
};

/// `0x` plus 64 hex characters.
const ADDRESS_LEN: usize = 66;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Portfolio,
    Platforms,
    All,
}

struct CliArgs {
    address: Option<String>,
    mode: Mode,
    json: bool,
    mock: bool,
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs {
        address: None,
        mode: Mode::Portfolio,
        json: false,
        mock: false,
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--platforms" => args.mode = Mode::Platforms,
            "--portfolio" => args.mode = Mode::Portfolio,
            "--all" => args.mode = Mode::All,
            "--json" => args.json = true,
            "--mock" => args.mock = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown flag: {other}");
                print_usage();
                std::process::exit(2);
            }
            other => args.address = Some(other.to_string()),
        }
    }
    args
}

fn print_usage() {
    println!("Usage: sui-advisor [ADDRESS] [--portfolio|--platforms|--all] [--json] [--mock]");
    println!();
    println!("  --portfolio   portfolio analysis report (default)");
    println!("  --platforms   DeFi platform detection report");
    println!("  --all         both reports");
    println!("  --json        machine-readable output");
    println!("  --mock        use canned demo data instead of a fullnode");
    println!();
    println!("Environment: SUI_RPC_URL (default mainnet fullnode), RUST_LOG");
}

/// Basic shape check only; the fullnode is the authority on validity.
fn address_looks_valid(address: &str) -> bool {
    address.len() == ADDRESS_LEN
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

fn prompt_address() -> anyhow::Result<String> {
    println!("📍 Please enter a Sui wallet address to analyze:");
    println!("   (Example: 0x1a2b3c4d5e6f7890abcdef1234567890abcdef1234567890abcdef1234567890)");
    print!("🔗 Wallet Address: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let address = line.trim().to_string();
    anyhow::ensure!(!address.is_empty(), "no address provided");

    if !address_looks_valid(&address) {
        println!("⚠️  Warning: Address format may be incorrect");
        println!("   Expected: 0x followed by 64 hex characters");
        print!("Continue anyway? (y/N): ");
        io::stdout().flush()?;
        let mut confirm = String::new();
        io::stdin().lock().read_line(&mut confirm)?;
        anyhow::ensure!(confirm.trim().eq_ignore_ascii_case("y"), "aborted");
    }
    Ok(address)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let args = parse_args();

    let address = match args.address {
        Some(address) => {
            if !address_looks_valid(&address) {
                tracing::warn!("address format looks unusual: {address}");
            }
            address
        }
        None => prompt_address()?,
    };

    let client: Arc<dyn ChainClient> = if args.mock {
        Arc::new(MockChainClient::sample())
    } else {
        Arc::new(SuiRpcClient::from_env()?)
    };
    tracing::info!("chain source: {}", client.name());

    if !client.health_check().await {
        tracing::warn!("chain source not responding; the fetch will likely fail");
    }

    // One top-level failure, never partial output.
    let snapshot = match client.snapshot(&address).await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            println!("{}", render_error(&address, &error));
            std::process::exit(1);
        }
    };
    tracing::info!(
        balances = snapshot.balances.len(),
        objects = snapshot.objects.len(),
        "fetched account snapshot"
    );

    // Gas and validator data only color the staking section; fetch failures
    // degrade to non-directional advice.
    let gas_price = client.fetch_gas_price().await.unwrap_or_else(|error| {
        tracing::warn!("gas price unavailable: {error}");
        "unavailable".into()
    });
    let validators = client.fetch_validators_apy().await.unwrap_or_else(|error| {
        tracing::warn!("validator APYs unavailable: {error}");
        Vec::new()
    });

    let registry = PlatformRegistry::new();
    let portfolio = analyze_portfolio(&snapshot.balances, &snapshot.objects);
    let platforms = PlatformDetector::new(registry).detect(&snapshot.objects, &snapshot.balances);
    let staking = staking_opportunities(&gas_price, &validators);

    if args.json {
        let analysis = FullAnalysis {
            address: &address,
            portfolio: &portfolio,
            platforms: &platforms,
            staking: &staking,
        };
        println!("{}", render_json(&analysis)?);
        return Ok(());
    }

    match args.mode {
        Mode::Portfolio => {
            println!("{}", render_portfolio_report(&address, &portfolio, &staking));
        }
        Mode::Platforms => {
            println!("{}", render_platforms_report(&address, &platforms, &registry));
        }
        Mode::All => {
            println!("{}", render_portfolio_report(&address, &portfolio, &staking));
            println!("{}", render_platforms_report(&address, &platforms, &registry));
        }
    }

    Ok(())
}
