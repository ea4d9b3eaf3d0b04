//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only cross-page state is the persisted login `session`; form state
//! lives in page-local signals.

pub mod session;
