//! Presentation-layer routers.
//!
//! Routers validate the inbound envelope and delegate the business operation
//! to injected use-case collaborators. They hold no business logic of their
//! own and never raise to the caller.

pub mod login_router;

pub use login_router::LoginRouter;
