//! # playback-bus
//!
//! A micro-crate providing the playback-notification stream for mediatrack.
//!
//! Playback runtimes announce lifecycle transitions (end of item, stall) on a
//! process-wide bus. This crate abstracts that bus behind the [`NotificationBus`]
//! trait so consumers can be tested without a live playback runtime, and ships
//! [`NotificationCenter`], an implementation that dispatches every notification
//! from a single background worker. Because subscription, unsubscription,
//! posting, and flushing all ride the same command queue, listener teardown is
//! atomic with respect to delivery.

mod bus;
mod center;
mod dispatch;
mod error;
mod item;
mod notification;
mod player;

pub use bus::*;
pub use center::*;
pub use error::*;
pub use item::*;
pub use notification::*;
pub use player::*;
