use crate::core::domain::Configuration;
use crate::gateway::factory as gateway_factory;
use crate::reviews::domain::service::ReviewServiceImpl;
use crate::reviews::domain::ReviewService;

// Factory method to create the review service wired to the remote books store.
pub(crate) fn create_review_service(
    config: &Configuration,
    client: reqwest::Client,
) -> Box<dyn ReviewService> {
    let book_api = gateway_factory::create_book_api(config, client.clone());
    let review_api = gateway_factory::create_review_api(config, client);
    Box::new(ReviewServiceImpl::new(config, book_api, review_api))
}
