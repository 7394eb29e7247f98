use serde::{Deserialize, Serialize};

// Configuration abstracts config options for the catalogue front end
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    // base url of the remote books API, e.g. https://host/api/
    pub books_api_url: String,
    pub search: SearchOptions,
    pub http_port: u16,
}

impl Configuration {
    pub fn from_env() -> Self {
        Configuration {
            books_api_url: env_or("BOOKS_API_URL", "http://localhost:9000/api/"),
            search: SearchOptions::from_env(),
            http_port: std::env::var("HTTP_PORT").ok()
                .and_then(|port| port.parse().ok()).unwrap_or(8080),
        }
    }
}

// SearchOptions locates the managed search index holding the book projection
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct SearchOptions {
    pub service_name: String,
    pub index_name: String,
    pub query_key: String,
    // overrides the managed service url, mainly for local targets
    pub endpoint: Option<String>,
}

impl SearchOptions {
    pub fn from_env() -> Self {
        SearchOptions {
            service_name: env_or("SEARCH_SERVICE_NAME", "books-catalogue"),
            index_name: env_or("SEARCH_INDEX_NAME", "books"),
            query_key: env_or("SEARCH_QUERY_KEY", ""),
            endpoint: std::env::var("SEARCH_ENDPOINT").ok(),
        }
    }

    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.search.windows.net", self.service_name),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
