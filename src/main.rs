use functional_options::{
    AppError, Server, logging, with_identifier, with_max_connections, with_tls,
};
use tracing::{debug, info};

fn main() -> Result<(), AppError> {
    logging::init()?;

    let defaults = Server::default();
    debug!(%defaults, "server without options");

    let server = Server::new([
        with_tls(),
        with_max_connections(99),
        with_identifier("identity"),
    ]);
    info!(identifier = server.identifier(), "server built");

    println!("{server}");

    Ok(())
}
