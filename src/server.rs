use std::fmt;

use tracing::{debug, trace};

use crate::config::{Opts, default_opts};
use crate::option::ServerOption;

/// Holds the configuration it was built with. There is no way to change it
/// after [`Server::new`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    opts: Opts,
}

impl Server {
    /// Start from [`default_opts`] and apply every option in order.
    ///
    /// Options that touch the same field are not merged or deduplicated; the
    /// last one applied wins.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: ServerOption,
    {
        let opts = options
            .into_iter()
            .enumerate()
            .fold(default_opts(), |mut opts, (position, option)| {
                trace!(position, "applying option");
                option.apply(&mut opts);
                opts
            });

        debug!(%opts, "server constructed");
        Self { opts }
    }

    /// The whole configuration, read-only.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Connection limit. May be zero or negative if an option set it so.
    pub fn max_connections(&self) -> i64 {
        self.opts.max_connections
    }

    /// Instance label. Empty if an option set it so.
    pub fn identifier(&self) -> &str {
        &self.opts.identifier
    }

    /// Whether TLS was switched on by an option.
    pub fn tls_enabled(&self) -> bool {
        self.opts.tls_enabled
    }
}

/// Same as [`Server::new`] with no options.
impl Default for Server {
    fn default() -> Self {
        Self {
            opts: default_opts(),
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{{Opts:{}}}", self.opts)
    }
}
