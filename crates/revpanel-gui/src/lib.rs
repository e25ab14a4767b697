//! revpanel GUI - standalone window around the control surface.
//!
//! The window owns a [`ControlSurface`](revpanel_gui_core::ControlSurface)
//! and an [`AppHost`] that logs every emitted change. There is no audio
//! engine behind it; the host is where one would plug in.

pub mod app;
pub mod host;

pub use app::{RevPanelApp, load_catalog};
pub use host::AppHost;
