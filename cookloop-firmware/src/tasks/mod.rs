//! Embassy async tasks
//!
//! The appliance loop and the LED ring writer; they share nothing but
//! the ring frame signal.

pub mod appliance;
pub mod ring;

pub use appliance::appliance_task;
pub use ring::ring_task;
