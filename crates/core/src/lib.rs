//! kiosk_core - pure functional core for the kiosk exhibition catalog.
//!
//! Everything in this crate is free of I/O: date parsing, the exhibition
//! state classifier, program grouping and catalog views. The repository
//! trait lives here too so the shell can swap storage backends.

pub mod exhibition;
pub mod serde;
pub mod storage;
