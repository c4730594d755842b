//! Force routing to the per-hand channels.

use glove_channel::{ChannelClient, ChannelConfig, Endpoint};
use glove_types::{FingerIntensity, HandSide};
use tracing::info;

/// Routes force commands to the left and right glove channels.
///
/// The router owns both [`ChannelClient`]s for its whole life and
/// addresses them by [`HandSide`]. Commands to a hand whose driver is
/// absent are dropped and reported as `false`; the other hand is never
/// affected.
#[derive(Debug)]
pub struct FeedbackRouter {
    clients: [ChannelClient; 2],
}

impl FeedbackRouter {
    /// Creates a router with both channels disconnected.
    #[must_use]
    pub fn new(config: ChannelConfig) -> Self {
        let clients =
            HandSide::ALL.map(|side| ChannelClient::new(Endpoint::curl(side), config.clone()));
        Self { clients }
    }

    /// Connects both channels, answering how many found a peer.
    ///
    /// Zero, one, or two connections are all normal outcomes; a single
    /// glove or no gloves at all just means fewer hands get feedback.
    pub fn open(&mut self) -> usize {
        let mut connected = 0;
        for client in &mut self.clients {
            if client.connect() {
                connected += 1;
            }
        }
        info!(connected, "Force-feedback channels opened");
        connected
    }

    /// Commands force on one hand, answering whether the frame was
    /// delivered to the driver.
    pub fn set_force(&mut self, side: HandSide, intensity: FingerIntensity) -> bool {
        self.clients[side.index()].send(intensity)
    }

    /// Commands zero force on one hand.
    pub fn relax(&mut self, side: HandSide) -> bool {
        self.set_force(side, FingerIntensity::zero())
    }

    /// Commands zero force on both hands.
    pub fn relax_all(&mut self) {
        for side in HandSide::ALL {
            self.relax(side);
        }
    }

    /// Closes both channels. Safe to call repeatedly, including after a
    /// partial or failed startup.
    pub fn shutdown(&mut self) {
        let open = self.connected_count();
        for client in &mut self.clients {
            client.disconnect();
        }
        if open > 0 {
            info!(closed = open, "Force-feedback channels shut down");
        }
    }

    /// The channel serving one hand.
    #[must_use]
    pub fn client(&self, side: HandSide) -> &ChannelClient {
        &self.clients[side.index()]
    }

    /// Returns `true` if the hand's channel currently has a peer.
    #[must_use]
    pub fn is_connected(&self, side: HandSide) -> bool {
        self.clients[side.index()].is_connected()
    }

    /// Number of channels currently connected.
    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.clients.iter().filter(|c| c.is_connected()).count()
    }
}

impl Drop for FeedbackRouter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
