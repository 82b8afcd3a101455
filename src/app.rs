use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::importers::{load_records, CsvImporter};
use crate::services::StationService;

/// Running application: the loaded dataset and the HTTP server task
pub struct Application {
    pub server_handle: JoinHandle<Result<(), std::io::Error>>,
}

impl Application {
    /// Load the result files and start serving the map
    ///
    /// Records are read once, on a blocking thread, before the server binds.
    /// A file that fails to parse aborts startup.
    pub async fn build(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing application components");

        let importer =
            CsvImporter::with_prefix(config.data_dir.clone(), config.file_prefix.clone());
        let records = tokio::task::spawn_blocking(move || load_records(&importer)).await??;

        let station_service = StationService::new(records);
        info!(
            "Loaded {} sample records covering {} characteristics",
            station_service.record_count(),
            station_service.characteristics().len()
        );

        let app_state = AppState { station_service };
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        let addr = config.server_addr();
        info!("Starting HTTP server on {}", addr);

        let server_handle = tokio::spawn(async move {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await
        });

        info!("Application initialized successfully");

        Ok(Self { server_handle })
    }

    /// Run until the server stops
    pub async fn run_until_stopped(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server_handle.await??;
        Ok(())
    }
}
