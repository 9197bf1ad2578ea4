use std::fmt;

pub const DEFAULT_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_IDENTIFIER: &str = "default";
pub const DEFAULT_TLS: bool = false;

/// Server configuration. Mutated only while options are being applied.
///
/// Fields are public so options defined outside this crate can set them.
/// Nothing here is validated: a zero or negative connection limit and an
/// empty identifier are stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub max_connections: i64,
    pub identifier: String,
    pub tls_enabled: bool,
}

/// A fresh configuration with every field at its default.
pub fn default_opts() -> Opts {
    Opts {
        max_connections: DEFAULT_MAX_CONNECTIONS,
        identifier: DEFAULT_IDENTIFIER.to_string(),
        tls_enabled: DEFAULT_TLS,
    }
}

impl Default for Opts {
    fn default() -> Self {
        default_opts()
    }
}

impl fmt::Display for Opts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{max_connections:{} identifier:{} tls_enabled:{}}}",
            self.max_connections, self.identifier, self.tls_enabled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let opts = default_opts();
        assert_eq!(opts.max_connections, 10);
        assert_eq!(opts.identifier, "default");
        assert!(!opts.tls_enabled);
    }

    #[test]
    fn default_trait_matches_default_opts() {
        assert_eq!(Opts::default(), default_opts());
    }

    #[test]
    fn each_call_returns_an_independent_value() {
        let mut first = default_opts();
        let second = default_opts();
        assert_eq!(first, second);

        first.identifier.push_str("-changed");
        first.max_connections = -1;
        assert_eq!(second, default_opts());
        assert_ne!(first, second);
    }

    #[test]
    fn display_lists_every_field() {
        let opts = Opts {
            max_connections: 99,
            identifier: "identity".to_string(),
            tls_enabled: true,
        };
        assert_eq!(
            opts.to_string(),
            "{max_connections:99 identifier:identity tls_enabled:true}"
        );
    }
}
