//! zt-addrs: overlay interface address lookup
//!
//! A library for discovering the addresses bound to overlay-network
//! interfaces (ZeroTier `zt*` adapters by default) by reading the
//! interface list the operating system already exposes.

pub mod config;
pub mod finder;
pub mod network;

pub use finder::{DEFAULT_FILTER, FindError, InterfaceAddressFinder};
