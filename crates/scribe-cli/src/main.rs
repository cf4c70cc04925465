//! Scribe - signed file-access audit submission.
//!
//! One-shot client: generates a fresh session identity, signs an audit
//! record describing a file-access event, submits it to the ledger, and
//! prints the receipt. No state survives past process exit.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use scribe_crypto::KeyPair;
use scribe_ledger::{LedgerClient, LedgerConfig, SubmitReceipt};
use scribe_record::{AccessKind, ActorDescriptor, FileDescriptor, SignedEnvelope};
use tracing_subscriber::EnvFilter;

/// Scribe - submit a signed file-access audit record to the ledger.
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ledger server address (host:port)
    #[arg(long, default_value = scribe_ledger::DEFAULT_ADDR)]
    server: String,

    /// File identifier
    #[arg(long)]
    file_id: String,

    /// File name
    #[arg(long)]
    file_name: String,

    /// User identifier
    #[arg(long)]
    user_id: String,

    /// User name
    #[arg(long)]
    user_name: String,

    /// Access type: READ, WRITE, UPDATE or DELETE
    #[arg(long, default_value = "READ")]
    access_type: AccessKind,

    /// Connect over an encrypted channel (wss)
    #[arg(long)]
    tls: bool,

    /// Request deadline in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli).await
}

async fn run(cli: Cli) -> Result<ExitCode> {
    // Fresh identity for this invocation; no identity, no submission.
    let keypair = KeyPair::generate().context("failed to generate session key pair")?;

    let envelope = SignedEnvelope::create(
        FileDescriptor::new(cli.file_id, cli.file_name),
        ActorDescriptor::new(cli.user_id, cli.user_name),
        cli.access_type,
        &keypair,
    )
    .context("failed to sign audit record")?;

    let config = LedgerConfig::new(cli.server)
        .with_tls(cli.tls)
        .with_request_timeout(Duration::from_secs(cli.timeout));

    let client = LedgerClient::connect(config).await?;
    let receipt = client.submit(&envelope).await?;

    print_receipt(&receipt);

    Ok(if receipt.status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_receipt(receipt: &SubmitReceipt) {
    if receipt.status.is_success() {
        println!("{}", "Audit record committed".green().bold());
    } else {
        println!("{}", "Audit record rejected".red().bold());
    }

    println!("{:>20} {}", "Request ID".dimmed(), receipt.req_id);
    println!("{:>20} {}", "TX Hash".dimmed(), receipt.tx_hash);
    println!("{:>20} {}", "Status".dimmed(), receipt.status);
    if let Some(error) = &receipt.error {
        println!("{:>20} {}", "Error".dimmed(), error.red());
    }

    if let Some(block) = &receipt.block {
        println!("\n{}", "Block".bold());
        println!("{:>20} {}", "Hash".dimmed(), block.block_hash);
        println!("{:>20} {}", "Number".dimmed(), block.block_number);
        println!("{:>20} {}", "Timestamp".dimmed(), block.timestamp);
        println!("{:>20} {}", "Previous".dimmed(), block.previous_block_hash);
        println!("{:>20} {}", "Merkle Root".dimmed(), block.merkle_root);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    const REQUIRED: [&str; 9] = [
        "scribe",
        "--file-id",
        "f1",
        "--file-name",
        "report.pdf",
        "--user-id",
        "u1",
        "--user-name",
        "alice",
    ];

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();

        assert_eq!(cli.server, "localhost:50051");
        assert_eq!(cli.access_type, AccessKind::Read);
        assert_eq!(cli.timeout, 10);
        assert!(!cli.tls);
    }

    #[test]
    fn test_all_access_literals_accepted() {
        for (literal, kind) in [
            ("READ", AccessKind::Read),
            ("WRITE", AccessKind::Write),
            ("UPDATE", AccessKind::Update),
            ("DELETE", AccessKind::Delete),
        ] {
            let mut args = REQUIRED.to_vec();
            args.extend(["--access-type", literal]);
            let cli = Cli::try_parse_from(args).unwrap();
            assert_eq!(cli.access_type, kind);
        }
    }

    #[test]
    fn test_unknown_access_type_rejected_at_parse_time() {
        // Rejected before any key generation or RPC happens
        let mut args = REQUIRED.to_vec();
        args.extend(["--access-type", "EXECUTE"]);

        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("EXECUTE"));
    }

    #[test]
    fn test_missing_identity_fields_are_usage_errors() {
        let err = Cli::try_parse_from(["scribe", "--file-id", "f1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
