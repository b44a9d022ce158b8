//! Posting enrichment: location parsing and visa-sponsorship detection.
//!
//! Pure text analysis over the posting's location field and description —
//! no I/O, safe to run from any worker.

pub mod location;
pub mod visa;

pub use location::{parse_location, LocationInfo, RemoteType};
pub use visa::{detect_visa_sponsorship, VisaSignal};
