//! # tracker-events
//!
//! Self-describing event envelope and the sink seam between trackers and
//! whatever buffers, inspects, or forwards their events. Trackers produce
//! [`SelfDescribingEvent`]s and hand them to an [`EventSink`]; everything
//! downstream of the sink (batching, transport, retry) is someone else's
//! concern.

mod event;
mod sink;

pub use event::*;
pub use sink::*;
