use actix_web::web;

use crate::catalog::adapter::outgoing::{ContentBundle, StaticContentStore};
use crate::tests::support::content_fixtures::fixture_bundle;
use crate::AppState;

/// Builds an [`AppState`] over the fixture catalog, or over any bundle that
/// passes catalog validation.
pub struct TestAppStateBuilder {
    bundle: ContentBundle,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            bundle: fixture_bundle(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_bundle(mut self, bundle: ContentBundle) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = StaticContentStore::from_bundle(self.bundle)
            .expect("test bundle should pass catalog validation");
        web::Data::new(AppState::from_store(store))
    }
}
