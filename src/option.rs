use crate::config::Opts;

/// Something that can override fields of an [`Opts`] during construction.
///
/// Any `Fn(&mut Opts)` is a `ServerOption`, so plain functions and closures
/// both work without wrapping.
pub trait ServerOption {
    fn apply(&self, opts: &mut Opts);
}

impl<F> ServerOption for F
where
    F: Fn(&mut Opts),
{
    fn apply(&self, opts: &mut Opts) {
        self(opts)
    }
}

/// A type-erased option.
///
/// Closures have anonymous types, so options of different origins are boxed
/// to share one list. Use [`boxed`] to put any other [`ServerOption`], such
/// as a struct implementing the trait, into the same list.
pub type OptFunc = Box<dyn Fn(&mut Opts) + Send + Sync>;

/// Erase the type of any option so it can sit next to the factories below.
pub fn boxed<O>(option: O) -> OptFunc
where
    O: ServerOption + Send + Sync + 'static,
{
    Box::new(move |opts: &mut Opts| option.apply(opts))
}

/// Enables TLS. Needs no captured state, so it is an option by itself.
pub fn tls(opts: &mut Opts) {
    opts.tls_enabled = true;
}

/// [`tls`] as an [`OptFunc`], for lists built from factories.
pub fn with_tls() -> OptFunc {
    Box::new(tls)
}

/// Sets the connection limit to `n`. The value is stored as given.
pub fn with_max_connections(n: i64) -> OptFunc {
    Box::new(move |opts: &mut Opts| opts.max_connections = n)
}

/// Sets the instance identifier.
pub fn with_identifier(id: impl Into<String>) -> OptFunc {
    let id = id.into();
    Box::new(move |opts: &mut Opts| opts.identifier = id.clone())
}
