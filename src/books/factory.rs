use crate::books::domain::service::CatalogueServiceImpl;
use crate::books::domain::CatalogueService;
use crate::core::domain::Configuration;
use crate::gateway::factory as gateway_factory;

// Factory method to create the catalogue service wired to the remote books store.
pub(crate) fn create_catalogue_service(
    config: &Configuration,
    client: reqwest::Client,
) -> Box<dyn CatalogueService> {
    let book_api = gateway_factory::create_book_api(config, client.clone());
    let review_api = gateway_factory::create_review_api(config, client);
    Box::new(CatalogueServiceImpl::new(config, book_api, review_api))
}
