#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Canned behavior of the mock resolver.
#[derive(Debug, Clone, Copy)]
pub enum MockResponse {
    /// NOERROR with one root-zone DNSKEY: flags 257 (KSK), algorithm 8,
    /// key tag 12345.
    RootDnskey,
    /// SERVFAIL with an empty answer section.
    ServFail,
    /// A reply that is not a DNS message at all.
    Garbage,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(response: MockResponse) -> Result<(Self, SocketAddr), std::io::Error> {
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let reply = Self::build_response(&buf[..len], response);
                            let _ = socket.send_to(&reply, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query: &[u8], response: MockResponse) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        match response {
            MockResponse::Garbage => vec![0xde, 0xad, 0xbe, 0xef],
            MockResponse::ServFail => {
                let mut reply = Vec::with_capacity(32);
                reply.extend_from_slice(&query[0..2]);
                reply.extend_from_slice(&[0x81, 0x82]);
                reply.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
                // question: . DNSKEY IN
                reply.extend_from_slice(&[0x00, 0x00, 0x30, 0x00, 0x01]);
                reply
            }
            MockResponse::RootDnskey => {
                let mut reply = Vec::with_capacity(64);
                reply.extend_from_slice(&query[0..2]);
                reply.extend_from_slice(&[0x81, 0x80]);
                reply.extend_from_slice(&[0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
                // question: . DNSKEY IN
                reply.extend_from_slice(&[0x00, 0x00, 0x30, 0x00, 0x01]);
                // answer: . DNSKEY, ttl 3600, rdlength 8
                reply.extend_from_slice(&[
                    0xc0, 0x0c, 0x00, 0x30, 0x00, 0x01, 0x00, 0x00, 0x0e, 0x10, 0x00, 0x08,
                ]);
                // rdata: flags 257, protocol 3, algorithm 8, key chosen so
                // the RFC 4034 key tag comes out at 12345
                reply.extend_from_slice(&[0x01, 0x01, 0x03, 0x08, 0x2c, 0x30, 0x00, 0x00]);
                reply
            }
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
