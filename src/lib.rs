//! Server configuration built from functional options.
//!
//! ```
//! use functional_options::{Server, with_identifier, with_max_connections, with_tls};
//!
//! let server = Server::new([
//!     with_tls(),
//!     with_max_connections(99),
//!     with_identifier("identity"),
//! ]);
//! assert_eq!(server.max_connections(), 99);
//! assert_eq!(server.identifier(), "identity");
//! assert!(server.tls_enabled());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod option;
pub mod server;

pub use config::{Opts, default_opts};
pub use error::AppError;
pub use option::{OptFunc, ServerOption, boxed, tls, with_identifier, with_max_connections, with_tls};
pub use server::Server;
