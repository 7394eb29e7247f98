use crate::core::domain::Configuration;
use crate::gateway::factory as gateway_factory;
use crate::search::domain::service::SearchServiceImpl;
use crate::search::domain::SearchService;

// Factory method to create the search service wired to the managed index.
pub(crate) fn create_search_service(
    config: &Configuration,
    client: reqwest::Client,
) -> Box<dyn SearchService> {
    let search_index = gateway_factory::create_search_index(config, client);
    Box::new(SearchServiceImpl::new(config, search_index))
}
