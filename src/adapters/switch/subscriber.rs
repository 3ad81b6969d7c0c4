use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::adapters::switch::error::SwitchError;
use crate::adapters::switch::message::SwitchMessage;
use crate::controllers::follow::SwitchSink;

/// How long a blocked receive waits before re-checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const MAX_DATAGRAM_BYTES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatagramOutcome {
    Delivered(bool),
    OtherTopic(String),
    Malformed(String),
}

/// Listens for switch messages on a UDP socket and forwards the value of
/// every message on `topic` to a [`SwitchSink`].
pub struct UdpSwitchSubscriber {
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl UdpSwitchSubscriber {
    pub fn spawn(
        addr: SocketAddr,
        topic: impl Into<String>,
        sink: Arc<dyn SwitchSink>,
    ) -> Result<Self, SwitchError> {
        let socket = UdpSocket::bind(addr).map_err(|source| SwitchError::Bind { addr, source })?;
        socket
            .set_read_timeout(Some(POLL_INTERVAL))
            .map_err(SwitchError::Socket)?;
        let local_addr = socket.local_addr().map_err(SwitchError::Socket)?;

        let topic = topic.into();
        let shutdown = Arc::new(AtomicBool::new(false));
        let worker_shutdown = Arc::clone(&shutdown);

        info!(%local_addr, %topic, "switch subscriber listening");

        let worker = thread::spawn(move || {
            Self::worker_loop(&socket, &topic, sink.as_ref(), &worker_shutdown);
        });

        Ok(Self {
            local_addr,
            shutdown,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::Release);

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
            debug!("switch subscriber stopped");
        }
    }

    fn worker_loop(socket: &UdpSocket, topic: &str, sink: &dyn SwitchSink, shutdown: &AtomicBool) {
        let mut buffer = [0_u8; MAX_DATAGRAM_BYTES];

        while !shutdown.load(Ordering::Acquire) {
            let (len, peer) = match socket.recv_from(&mut buffer) {
                Ok(received) => received,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    continue;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!(error = %e, "switch socket failed, subscriber exiting");
                    return;
                }
            };

            match handle_datagram(&buffer[..len], topic, sink) {
                DatagramOutcome::Delivered(value) => {
                    debug!(%peer, value, "switch value received");
                }
                DatagramOutcome::OtherTopic(other) => {
                    debug!(%peer, topic = %other, "ignoring message for another topic");
                }
                DatagramOutcome::Malformed(reason) => {
                    warn!(%peer, %reason, "dropping malformed switch datagram");
                }
            }
        }
    }
}

impl Drop for UdpSwitchSubscriber {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Decodes one datagram and delivers its value if it is for `topic`.
pub fn handle_datagram(bytes: &[u8], topic: &str, sink: &dyn SwitchSink) -> DatagramOutcome {
    match SwitchMessage::decode(bytes) {
        Ok(message) if message.topic == topic => {
            sink.receive(message.data);
            DatagramOutcome::Delivered(message.data)
        }
        Ok(message) => DatagramOutcome::OtherTopic(message.topic),
        Err(e) => DatagramOutcome::Malformed(e.to_string()),
    }
}
