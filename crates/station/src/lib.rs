//! Gauge station store and validated station/grid association.
//!
//! The [`GaugeStore`] holds the gauge metadata and observation tables,
//! loaded once and shared read-only by every [`Station`]. Constructing a
//! [`Station`] via [`Station::locate`] performs the full association pass:
//!
//! ```text
//! Station::locate()
//!   ├─ metadata lookup           (store.rs, one record per ID)
//!   ├─ observation lookup + sort
//!   ├─ nearby-gauge box search   (inclusive bounding box, not circular)
//!   └─ nearest-cell match        (pluvio-grid) + tolerance validation
//! ```
//!
//! A located station is immutable; neighborhood grids are obtained from
//! [`Station::nearby_window`] and owned by the caller.

pub mod error;
pub mod station;
pub mod store;

pub use error::StationError;
pub use station::{RAIN_COL, Station};
pub use store::{GaugeMetadata, GaugeObservation, GaugeStore};
