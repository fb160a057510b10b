//! Core for a DNS profile switcher: named resolver profiles persisted to a
//! JSON file, interface enumeration, and apply/clear of static DNS on an
//! interface through the external `netsh` utility.
//!
//! The presentation shell (windowing, elevation, tray) lives outside this
//! crate and consumes [`DnsManager`].

pub mod commands;
pub mod manager;
pub mod netsh;
pub mod network;
pub mod store;
pub mod types;

pub use commands::{clear_dns, get_current_dns, set_dns};
pub use manager::{DnsManager, ManagerError};
pub use netsh::{CommandError, Netsh, Runner};
pub use network::{list_interfaces, parse_interface_table};
pub use store::{ProfileStore, StoreError};
pub use types::DnsProfile;
