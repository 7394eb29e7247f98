use crate::core::catalogue::CatalogueError;

// helper method to build the outbound client shared by every gateway; timeouts
// stay at the client defaults, failures surface per call
pub(crate) fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().build()
}

// json structured logs, one line per event, for the log collector
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

impl From<reqwest::Error> for CatalogueError {
    fn from(err: reqwest::Error) -> Self {
        let (retryable, reason) = retryable_transport_error(&err);
        CatalogueError::gateway(format!("{}", err).as_str(), reason, retryable)
    }
}

fn retryable_transport_error(err: &reqwest::Error) -> (bool, Option<String>) {
    if err.is_timeout() {
        (true, Some("Timeout".to_string()))
    } else if err.is_connect() {
        (true, Some("Connect".to_string()))
    } else if err.is_body() || err.is_decode() {
        (false, Some("Body".to_string()))
    } else if err.is_builder() {
        (false, Some("Builder".to_string()))
    } else {
        (false, None)
    }
}
