use basex::{
    routes::{create_server, Service},
    Configuration, Error, Logger,
};
use std::{net::SocketAddr, process, sync::Arc};
use tokio::runtime::Builder;

fn run(configuration: Configuration, logger: Logger) -> Result<(), Error> {
    let runtime = Builder::new_multi_thread()
        .worker_threads(configuration.threads())
        .enable_all()
        .build()
        .map_err(|error| Error::new(format!("Could not start runtime ({})", error)))?;

    logger.log(format!("Default alphabet {}", configuration.alphabet().as_str()));
    let service = Arc::new(Service::new(configuration.alphabet().clone()));
    let server = create_server(service, logger);
    let address = SocketAddr::new(configuration.host(), configuration.port());
    runtime
        .block_on(server.run(address))
        .map_err(|error| Error::new(format!("Server failed ({})", error)))
}

fn main() {
    let logger = Logger::new();
    let result = Configuration::new().and_then(|configuration| run(configuration, logger));
    if let Err(error) = result {
        logger.log(error);
        process::exit(1);
    }
}
