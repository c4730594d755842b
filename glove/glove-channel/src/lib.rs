//! Per-hand force-feedback byte channels over Unix domain sockets.
//!
//! Each glove driver that accepts force feedback listens on one named
//! endpoint per hand, `vrapplication/ffb/curl/left` and
//! `vrapplication/ffb/curl/right`, realized as Unix domain sockets under
//! a configurable base directory. A [`ChannelClient`] owns the outbound
//! side of one such endpoint and pushes fixed-layout
//! [`FingerIntensity`](glove_types::FingerIntensity) frames at it.
//!
//! The crate is built around one assumption: a missing driver is normal,
//! not an error. [`ChannelClient::connect`] answers `false` when nobody
//! is listening, [`ChannelClient::send`] answers `false` when there is no
//! connection or the peer went away, and neither disturbs the rest of
//! the application. There is no reconnection logic; a channel that loses
//! its peer stays down until the caller connects again.
//!
//! Transport is Unix domain sockets, so this crate targets Unix-family
//! platforms.
//!
//! # Example
//!
//! ```no_run
//! use glove_channel::{ChannelClient, ChannelConfig, Endpoint};
//! use glove_types::{FingerIntensity, HandSide};
//!
//! let endpoint = Endpoint::curl(HandSide::Left);
//! let mut client = ChannelClient::new(endpoint, ChannelConfig::default());
//!
//! if client.connect() {
//!     client.send(FingerIntensity::splat(500));
//!     client.send(FingerIntensity::zero());
//! }
//! client.disconnect();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod endpoint;
mod error;

pub use client::{ChannelClient, ChannelState};
pub use config::{ChannelConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_WRITE_TIMEOUT};
pub use endpoint::{Endpoint, FFB_NAMESPACE};
pub use error::{ChannelError, Result};
