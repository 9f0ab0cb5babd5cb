//! Controller link: connects out to the controller endpoint and feeds the
//! command queue.
//!
//! The link task is the asynchronous side of the relay. It only ever
//! translates and enqueues; world mutation happens on the dispatch loop.

use std::net::SocketAddr;

use maestro_proto::translate;
use maestro_relay::CommandSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

/// Open a connection to the controller and relay its batches until the
/// stream closes.
///
/// One attempt per call: connect failures, read errors, and EOF all end the
/// task. Reconnecting is a fresh `connect` trigger.
pub fn connect(addr: SocketAddr, commands: CommandSender) {
    tokio::spawn(async move {
        let stream = match TcpStream::connect(addr).await {
            Ok(s) => s,
            Err(e) => {
                warn!("failed to connect to controller at {addr}: {e}");
                return;
            }
        };
        info!("controller link established to {addr}");

        let mut lines = BufReader::new(stream).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    debug!("controller batch: {line}");
                    for command in translate(line) {
                        commands.enqueue(command);
                    }
                }
                Ok(None) => {
                    info!("controller closed the connection");
                    break;
                }
                Err(e) => {
                    warn!("controller link read error: {e}");
                    break;
                }
            }
        }
    });
}
