use crate::configuration::{ContactSettings, Settings};
use crate::routes::{health_check, submit_contact};
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// `Application` works as a wrapper for actix_web `dev::Server`.
/// `dev::Server` does not tell us which port the app was allocated, so we
/// keep the port alongside it. Why do we need to know the port? The tests
/// bind port 0 and have to find out where the server actually landed.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Binds the listener described by `configuration` and starts the server
    /// with `run`, which can then be driven using `run_until_stopped`.
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, configuration.contact)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    contact_settings: ContactSettings,
) -> Result<Server, std::io::Error> {
    // web::Data wraps the settings in an Arc<T>, shared read-only by every worker
    let contact_settings = web::Data::new(contact_settings);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/api/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(submit_contact))
            .app_data(contact_settings.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
