//! Vanity import path server.
//!
//! Answers `go get` style requests for custom import paths with
//! `go-import` / `go-source` metadata pointing at the real repository.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod vanity;

pub use config::schema::VanityConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RuleSet;
pub use vanity::Site;
