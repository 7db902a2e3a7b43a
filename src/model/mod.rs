//! Data Model
//!
//! In-memory representation of a transit system.
//!
//! ## Shape
//! ```text
//! System
//!  └── stops: [Station]
//!       ├── directions: ["Northbound", "Southbound"]
//!       └── lines: [ {line id → Line}, {line id → Line} ]
//!                     direction 0        direction 1
//! ```
//!
//! Stations are fixed once the system is loaded. Only `Line::times`
//! changes at runtime, and always wholesale.

mod index;
mod system;
mod update;

pub use index::StationIndex;
pub use system::{Coordinates, Line, Station, System, DIRECTION_COUNT};
pub use update::{direction_slot, LineUpdate, StationUpdate, Update};
