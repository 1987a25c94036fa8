//! Connection Handler
//!
//! A single TCP connection to the manager console.

use std::io::{self, BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::network::{Channel, ManagerAddr};
use crate::protocol::{read_line, write_request};

/// An open connection to the manager
///
/// Closed when dropped.
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Connect to the manager and configure the socket
    pub fn open(addr: &ManagerAddr, config: &ClientConfig) -> Result<Self> {
        let stream = connect(addr, config.connect_timeout_ms)?;

        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| addr.to_string());

        stream.set_nodelay(config.nodelay)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        let mut connection = Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        };
        connection.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;

        tracing::debug!("Connected to manager at {}", connection.peer_addr);
        Ok(connection)
    }

    /// Configure connection timeouts (0 leaves the timeout unset)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Channel for Connection {
    fn send_line(&mut self, line: &str) -> Result<()> {
        tracing::trace!("Sending to {}: {}", self.peer_addr, line);
        write_request(&mut self.writer, line)
    }

    fn recv_line(&mut self) -> Result<String> {
        let line = read_line(&mut self.reader)?;
        tracing::trace!("Received from {}: {}", self.peer_addr, line);
        Ok(line)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        tracing::debug!("Closing connection to {}", self.peer_addr);
    }
}

/// Resolve the address and connect, trying each resolved socket address
fn connect(addr: &ManagerAddr, timeout_ms: u64) -> io::Result<TcpStream> {
    if timeout_ms == 0 {
        return TcpStream::connect((addr.host(), addr.port()));
    }

    let timeout = Duration::from_millis(timeout_ms);
    let mut last_err = None;
    for socket_addr in (addr.host(), addr.port()).to_socket_addrs()? {
        match TcpStream::connect_timeout(&socket_addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no socket address resolved for {}", addr),
        )
    }))
}
