//! zkrpc CLI — query a zkSync JSON-RPC endpoint from the terminal.
//!
//! Usage:
//! ```bash
//! # List tokens on mainnet
//! zkrpc tokens
//!
//! # Account state and nonce on a local server
//! zkrpc account --network localhost --address 0x2d5b…241e
//!
//! # Fee quote for a transfer paid in USDC
//! zkrpc fee --tx-type Transfer --address 0x2d5b…241e --token USDC
//!
//! # Raw call against a custom endpoint
//! zkrpc call --url http://127.0.0.1:3030/jsrpc --method tokens
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use zkrpc_core::RpcTransport;
use zkrpc_http::{HttpClientConfig, HttpRpcClient, Network};
use zkrpc_provider::ZkSyncProvider;
use zkrpc_types::TxType;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "tokens" => cmd_tokens(&args[2..]).await,
        "contract" => cmd_contract(&args[2..]).await,
        "status" => cmd_status(&args[2..]).await,
        "account" => cmd_account(&args[2..]).await,
        "nonce" => cmd_nonce(&args[2..]).await,
        "receipt" => cmd_receipt(&args[2..]).await,
        "priority-op" => cmd_priority_op(&args[2..]).await,
        "fee" => cmd_fee(&args[2..]).await,
        "price" => cmd_price(&args[2..]).await,
        "call" => cmd_call(&args[2..]).await,
        "networks" => {
            cmd_networks();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("zkrpc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("zkrpc {}", env!("CARGO_PKG_VERSION"));
    println!("Query a zkSync JSON-RPC endpoint\n");
    println!("USAGE:");
    println!("    zkrpc <COMMAND> [--network NAME | --url URL] [FLAGS]\n");
    println!("COMMANDS:");
    println!("    tokens                          List tokens");
    println!("    contract                        L1 contract addresses");
    println!("    status                          Contract addresses and L1 confirmations");
    println!("    account     --address A         Account state");
    println!("    nonce       --address A         Account id and committed nonce");
    println!("    receipt     --hash H            Transaction status");
    println!("    priority-op --serial N          Priority operation status");
    println!("    fee         --tx-type T --address A --token K");
    println!("                                    Fee quote (T: Withdraw, Transfer,");
    println!("                                    FastWithdraw, ChangePubKeyOnchainAuth)");
    println!("    price       --token SYMBOL      Token price");
    println!("    call        --method M [--params JSON]");
    println!("                                    Raw JSON-RPC call");
    println!("    networks                        List built-in networks");
    println!("    version                         Print version");
    println!("    help                            Print this help\n");
    println!("ENDPOINT FLAGS:");
    println!("    --network <NAME>   mainnet | rinkeby | ropsten | localhost  [default: mainnet]");
    println!("    --url <URL>        Custom JSON-RPC endpoint (overrides --network)");
}

async fn cmd_tokens(args: &[String]) -> Result<()> {
    let tokens = provider(args)?.get_tokens().await?;
    for t in tokens.iter() {
        println!("{:>4}  {:<8} {:>2}  {}", t.id, t.symbol, t.decimals, t.address);
    }
    Ok(())
}

async fn cmd_contract(args: &[String]) -> Result<()> {
    let contract = provider(args)?.get_contract_address().await?;
    println!("  Main contract: {}", contract.main_contract);
    println!("  Gov contract:  {}", contract.gov_contract);
    Ok(())
}

async fn cmd_status(args: &[String]) -> Result<()> {
    let p = provider(args)?;
    let start = std::time::Instant::now();
    let (contract, confirmations) = futures::try_join!(
        p.get_contract_address(),
        p.get_confirmations_for_eth_op_amount()
    )?;
    let latency = start.elapsed();

    println!("  Endpoint:      {}", p.transport().url());
    println!("  Main contract: {}", contract.main_contract);
    println!("  Confirmations: {confirmations}");
    println!("  Latency:       {}ms", latency.as_millis());
    Ok(())
}

async fn cmd_account(args: &[String]) -> Result<()> {
    let address = required(args, "--address")?;
    let state = provider(args)?.get_state(&address).await?;
    print_json(&serde_json::to_value(&state)?)
}

async fn cmd_nonce(args: &[String]) -> Result<()> {
    let address = required(args, "--address")?;
    let (id, nonce) = provider(args)?.get_account_nonce(&address).await?;
    match id {
        Some(id) => println!("  Account id: {id}"),
        None => println!("  Account id: (not registered)"),
    }
    println!("  Nonce:      {nonce}");
    Ok(())
}

async fn cmd_receipt(args: &[String]) -> Result<()> {
    let hash = required(args, "--hash")?;
    let receipt = provider(args)?.get_tx_receipt(&hash).await?;
    print_json(&serde_json::to_value(&receipt)?)
}

async fn cmd_priority_op(args: &[String]) -> Result<()> {
    let serial: u64 = required(args, "--serial")?
        .parse()
        .context("--serial must be an integer")?;
    let info = provider(args)?.get_priority_op_status(serial).await?;
    print_json(&serde_json::to_value(&info)?)
}

async fn cmd_fee(args: &[String]) -> Result<()> {
    let raw_type = required(args, "--tx-type")?;
    let tx_type =
        TxType::from_wire(&raw_type).ok_or_else(|| anyhow!("unknown tx type: {raw_type}"))?;
    let address = required(args, "--address")?;
    let token = required(args, "--token")?;

    let fee = provider(args)?
        .get_transaction_fee(tx_type, &address, token.as_str())
        .await?;
    print_json(&serde_json::to_value(&fee)?)
}

async fn cmd_price(args: &[String]) -> Result<()> {
    let symbol = required(args, "--token")?;
    let p = provider(args)?;
    let tokens = p.get_tokens().await?;
    let token = tokens
        .find_by_symbol(&symbol)
        .ok_or_else(|| anyhow!("unknown token: {symbol}"))?;
    let price = p.get_token_price(token).await?;
    println!("{} {price}", token.symbol);
    Ok(())
}

async fn cmd_call(args: &[String]) -> Result<()> {
    let method = required(args, "--method")?;
    let params = match parse_flag(args, "--params") {
        Some(raw) => match serde_json::from_str::<Value>(&raw).context("--params must be JSON")? {
            Value::Array(items) => items,
            other => vec![other],
        },
        None => vec![],
    };

    let result = transport(args)?.request(&method, params).await?;
    print_json(&result)
}

fn cmd_networks() {
    println!("Built-in networks:\n");
    for n in Network::presets() {
        println!("  {:<10} chain {:<3} {}", n.name, n.chain_id, n.url());
    }
}

fn transport(args: &[String]) -> Result<Arc<dyn RpcTransport>> {
    let network = match parse_flag(args, "--url") {
        Some(url) => Network::custom(&url, 0)?,
        None => {
            let name = parse_flag(args, "--network").unwrap_or_else(|| "mainnet".into());
            Network::from_name(&name)?
        }
    };
    tracing::debug!(%network, "using endpoint");
    let client = HttpRpcClient::for_network(&network, HttpClientConfig::default())?;
    Ok(Arc::new(client))
}

fn provider(args: &[String]) -> Result<ZkSyncProvider> {
    Ok(ZkSyncProvider::new(transport(args)?))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn required(args: &[String], flag: &str) -> Result<String> {
    match parse_flag(args, flag) {
        Some(v) => Ok(v),
        None => bail!("{flag} is required"),
    }
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}
