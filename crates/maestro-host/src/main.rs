mod config;
mod link;
mod sim;

use std::net::SocketAddr;
use std::time::Duration;

use config::HostConfig;
use maestro_relay::{command_queue, CommandSender, Dispatcher};
use maestro_relay::world::World;
use sim::SimWorld;
use tokio::io::AsyncBufReadExt;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let config = match HostConfig::load("maestro.toml") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load maestro.toml: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Maestro host v{} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Controller endpoint: {}:{}",
        config.controller.address, config.controller.port
    );
    info!(
        "Dispatch interval: {} ms, queue capacity: {}",
        config.relay.tick_interval_ms, config.relay.queue_capacity
    );

    let controller_addr: SocketAddr =
        format!("{}:{}", config.controller.address, config.controller.port)
            .parse()
            .expect("invalid controller endpoint");

    let (command_tx, command_rx) = command_queue(config.relay.queue_capacity);
    let mut dispatcher = Dispatcher::new(command_rx, SimWorld::new());

    // Handle Ctrl+C
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    // Console: read lines from stdin
    let (console_tx, mut console_rx) = tokio::sync::mpsc::channel::<String>(32);
    tokio::spawn(async move {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim().to_string();
            if !line.is_empty() && console_tx.send(line).await.is_err() {
                break;
            }
        }
    });

    info!("Type 'connect' to open the controller link, 'help' for commands");

    let mut tick_interval =
        tokio::time::interval(Duration::from_millis(config.relay.tick_interval_ms));
    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                dispatcher.tick();
            }
            Some(line) = console_rx.recv() => {
                if !handle_console_command(&line, controller_addr, &command_tx, &mut dispatcher) {
                    break;
                }
            }
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }
    info!("Host shut down.");
}

/// Handle one console line. Returns false when the host should stop.
fn handle_console_command(
    line: &str,
    controller_addr: SocketAddr,
    commands: &CommandSender,
    dispatcher: &mut Dispatcher<SimWorld>,
) -> bool {
    match line {
        "connect" => {
            link::connect(controller_addr, commands.clone());
        }
        "reset" => {
            dispatcher.reset_spawn_height();
            info!("Spawn height reset");
        }
        "status" => {
            info!(
                "Spawn offset {:.0}, difficulty {:.2}, {} entities spawned, {} items granted",
                dispatcher.spawn_height_offset(),
                dispatcher.world().difficulty_coefficient(),
                dispatcher.world().entity_count(),
                dispatcher.world().inventory_size(),
            );
        }
        "help" => {
            info!("Commands: connect, reset, status, stop");
        }
        "stop" | "quit" => {
            return false;
        }
        _ => {
            warn!("Unknown console command: {line}");
        }
    }
    true
}
