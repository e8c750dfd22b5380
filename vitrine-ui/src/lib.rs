//! Vitrine widget runtime
//!
//! This crate contains the portfolio page's widget controllers: the
//! carousel gesture-and-animation state machine and the lightbox modal.
//! The DOM stays on the host side; the runtime consumes translated input
//! events ([`domains::ui::messages::Message`]) and returns declarative
//! side-effect commands ([`domains::ui::effects::Effect`]) for the host
//! to apply.
//!
//! Notes
//! - Public items are subject to change while the widget surface
//!   stabilizes.
//! - Most consumers should go through [`domains::ui::page::PageController`];
//!   the inner modules are exposed mainly to enable testing and internal
//!   reuse.

pub mod domains;
pub mod error;
pub mod infra;
pub mod prelude;

pub use domains::ui::page::PageController;
pub use error::UiError;
