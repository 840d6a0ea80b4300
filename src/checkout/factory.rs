use crate::catalog::factory::create_catalog_service;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::users::factory::create_user_service;

pub(crate) fn create_checkout_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn CheckoutService> {
    let catalog_svc = create_catalog_service(config, store);
    let user_svc = create_user_service(config, store);
    Box::new(CheckoutServiceImpl::new(config, user_svc, catalog_svc, store.publisher.clone()))
}
