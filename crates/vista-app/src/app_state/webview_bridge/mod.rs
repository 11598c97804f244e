//! Bridge between the navigation widget and the two webviews.
//!
//! Handles layout and coordinate conversion, IPC message dispatch, and
//! pushing session state to the chrome panel.

mod bounds;
mod ipc_dispatch;
mod sync;

pub(super) use bounds::{rect_to_wry, PreviewLayout};
