//! Real-time delivery over Server-Sent Events

pub mod subscription;

pub use subscription::handle_presence_subscription;
