//! Presentation layer: MVI state machines for the browse and login views,
//! transient notifications, and a text front end.

pub mod browse;
pub mod login;
pub mod mvi;
pub mod notifications;
pub mod render;
pub mod runtime;
