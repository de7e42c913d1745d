//! Shared fixtures for gateway tests.

use tokio::runtime::Runtime;
use wiremock::MockServer;

use crate::locator::RepositoryLocator;

use super::client::HttpGateway;

/// Clone URI resolved against the mock server in every gateway test.
pub(super) const CLONE_URI: &str = "ssh://git@stash.example.com/scm/PROJ/repo.git";

/// Listing path the mock server expects for `CLONE_URI`.
pub(super) const LISTING_PATH: &str = "/rest/api/1.0/projects/PROJ/repos/repo/pull-requests/";

/// Starts a runtime and mock server, then builds a gateway pointing at them.
pub(super) fn gateway_fixture() -> (Runtime, MockServer, HttpGateway) {
    let runtime = Runtime::new().expect("runtime should start");
    let server = runtime.block_on(MockServer::start());
    let gateway = gateway_for(&server);
    (runtime, server, gateway)
}

/// Builds an unauthenticated gateway whose host override points at `server`.
pub(super) fn gateway_for(server: &MockServer) -> HttpGateway {
    let locator = locator_for(server);
    HttpGateway::for_repository(locator, None).expect("gateway should build")
}

/// Resolves `CLONE_URI` with the mock server as host override.
pub(super) fn locator_for(server: &MockServer) -> RepositoryLocator {
    RepositoryLocator::from_scm_uri(CLONE_URI, Some(&server.uri()))
        .expect("clone URI should resolve")
}
