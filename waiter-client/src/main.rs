//! Interactive waiter console
//!
//! Run: cargo run --bin waiter -- --base-url http://localhost:5000

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use clap::Parser;
use waiter_client::logger::init_logger;
use waiter_client::{
    Dialog, FlowHandle, FlowSurface, HttpImageLoader, ImageLoader, MenuEntry, NetworkWaiterApi,
    NoopImageLoader, OrderFlowController, RenderedRow, WaiterConfig,
};

/// Browse the menu and place orders for a seat
#[derive(Debug, Parser)]
#[command(name = "waiter", version)]
struct Cli {
    /// Server base URL (overrides WAITER_API_BASE)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Currency symbol used for prices
    #[arg(long)]
    currency: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to a daily file in this directory
    #[arg(long)]
    log_dir: Option<String>,

    /// Do not download thumbnails
    #[arg(long)]
    no_images: bool,
}

impl Cli {
    fn apply(&self, mut config: WaiterConfig) -> WaiterConfig {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(symbol) = &self.currency {
            config = config.with_currency_symbol(symbol.clone());
        }
        let level = self.log_level.clone().unwrap_or(config.log_level.clone());
        let dir = self.log_dir.clone().or(config.log_dir.clone());
        config.with_logging(level, dir)
    }
}

/// What the next input line answers
#[derive(Debug, Clone, Default)]
enum Prompt {
    #[default]
    Menu,
    LoadError,
    SeatPicker(MenuEntry),
    Acknowledge,
}

#[derive(Default)]
struct ConsoleState {
    rows: Vec<RenderedRow>,
    prompt: Prompt,
}

struct ConsoleSurface {
    state: Arc<Mutex<ConsoleState>>,
}

impl ConsoleSurface {
    fn set_prompt(&self, prompt: Prompt) {
        if let Ok(mut state) = self.state.lock() {
            state.prompt = prompt;
        }
    }
}

impl FlowSurface for ConsoleSurface {
    fn render(&mut self, rows: &[RenderedRow]) {
        print_rows(rows);
        if let Ok(mut state) = self.state.lock() {
            state.rows = rows.to_vec();
        }
    }

    fn present(&mut self, dialog: Dialog) {
        println!("\n━━━ {} ━━━", dialog.title());
        println!("{}", dialog.message());

        let prompt = match dialog {
            Dialog::LoadError { .. } => {
                println!("[r] Retry   [any other key] Dismiss");
                Prompt::LoadError
            }
            Dialog::SeatPicker { entry, labels } => {
                for chunk in labels.chunks(5) {
                    println!("  {}", chunk.join("   "));
                }
                println!("Enter seat number (1-{}), or [c] Cancel", labels.len());
                Prompt::SeatPicker(entry)
            }
            Dialog::EmptyCatalog | Dialog::OrderConfirmed { .. } | Dialog::OrderFailed { .. } => {
                println!("[enter] OK");
                Prompt::Acknowledge
            }
        };
        self.set_prompt(prompt);
        let _ = io::stdout().flush();
    }
}

fn print_rows(rows: &[RenderedRow]) {
    println!("\n🍽  Menu ({} items)", rows.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, row) in rows.iter().enumerate() {
        let image = match row.thumbnail().byte_len() {
            Some(len) => format!("[img {}KB]", len.div_ceil(1024)),
            None => String::new(),
        };
        println!(
            "{:>3}. {:<24} {:>10} {}",
            i + 1,
            row.title(),
            row.price_label(),
            image
        );
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Enter item number to order, [r] Refresh, [q] Quit");
}

/// Blocking stdin loop, translating lines into flow actions
fn input_loop(handle: FlowHandle, state: Arc<Mutex<ConsoleState>>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let Ok(mut guard) = state.lock() else { break };
        let prompt = std::mem::take(&mut guard.prompt);
        match prompt {
            Prompt::Menu => {
                if input.eq_ignore_ascii_case("r") {
                    drop(guard);
                    handle.refresh();
                    continue;
                }
                let row = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| guard.rows.get(i).cloned());
                drop(guard);
                match row {
                    Some(row) => row.activate(),
                    None => println!("Unknown choice: {}", input),
                }
            }
            Prompt::LoadError => {
                drop(guard);
                if input.eq_ignore_ascii_case("r") {
                    handle.retry();
                } else {
                    handle.dismiss();
                }
            }
            Prompt::SeatPicker(entry) => {
                if input.is_empty() || input.eq_ignore_ascii_case("c") {
                    drop(guard);
                    handle.cancel_seat();
                    continue;
                }
                let Ok(number) = input.parse::<u8>() else {
                    println!("Invalid seat: {}", input);
                    guard.prompt = Prompt::SeatPicker(entry);
                    continue;
                };
                drop(guard);
                if let Err(e) = handle.choose_seat_number(entry.clone(), number) {
                    println!("{}", e);
                    if let Ok(mut guard) = state.lock() {
                        guard.prompt = Prompt::SeatPicker(entry);
                    }
                }
            }
            Prompt::Acknowledge => {
                print_rows(&guard.rows);
            }
        }
    }

    println!("\n👋 Goodbye!");
    handle.shutdown();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(WaiterConfig::from_env());
    init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(base_url = %config.base_url, "🦀 Waiter client starting...");

    let api = NetworkWaiterApi::new(&config)?;
    let images: Arc<dyn ImageLoader> = if cli.no_images {
        Arc::new(NoopImageLoader)
    } else {
        Arc::new(HttpImageLoader::new(config.timeout_secs))
    };

    let state = Arc::new(Mutex::new(ConsoleState::default()));
    let surface = ConsoleSurface {
        state: Arc::clone(&state),
    };
    let flow = OrderFlowController::new(api, surface, images, config.currency_symbol.clone());

    let handle = flow.handle();
    std::thread::spawn(move || input_loop(handle, state));

    flow.run().await;
    Ok(())
}
