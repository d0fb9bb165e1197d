//! Adapter from the directions client to the application port

use std::sync::Arc;

use application::{ApplicationError, DirectionsPort, DirectionsQuery};
use async_trait::async_trait;
use domain::{DomainError, RouteStep};
use integration_directions::{DirectionsClient, DirectionsError};
use tracing::{debug, instrument};

/// Status reported when the provider said OK but returned no route
const NO_ROUTES_STATUS: &str = "ZERO_RESULTS";

/// Implements [`DirectionsPort`] on top of a [`DirectionsClient`]
pub struct DirectionsAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for DirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsAdapter").finish_non_exhaustive()
    }
}

impl DirectionsAdapter {
    /// Wrap a directions client
    pub fn new(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }
}

fn map_error(error: DirectionsError) -> ApplicationError {
    match error {
        DirectionsError::Provider { status, message } => {
            ApplicationError::provider(status, message)
        },
        DirectionsError::NoRoutes { .. } => {
            ApplicationError::provider(NO_ROUTES_STATUS, Some(error.to_string()))
        },
        DirectionsError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        DirectionsError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        DirectionsError::InvalidStep(msg) => DomainError::InvalidStepKind(msg).into(),
        DirectionsError::ConnectionFailed(_)
        | DirectionsError::RequestFailed(_)
        | DirectionsError::ParseError(_)
        | DirectionsError::Timeout { .. } => ApplicationError::ExternalService(error.to_string()),
    }
}

#[async_trait]
impl DirectionsPort for DirectionsAdapter {
    #[instrument(skip(self, query), fields(mode = %query.mode))]
    async fn route_steps(&self, query: &DirectionsQuery) -> Result<Vec<RouteStep>, ApplicationError> {
        let route = self
            .client
            .directions(query.origin, &query.destination, query.mode)
            .await
            .map_err(map_error)?;

        debug!(
            start = ?route.start_address,
            end = ?route.end_address,
            distance = ?route.distance_text,
            "Directions adapter received route"
        );
        Ok(route.steps)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use domain::{Coordinate, Destination, TravelMode};
    use integration_directions::DirectionsRoute;

    use super::*;

    struct StubClient {
        result: Mutex<Option<Result<DirectionsRoute, DirectionsError>>>,
    }

    impl StubClient {
        fn returning(result: Result<DirectionsRoute, DirectionsError>) -> Arc<Self> {
            Arc::new(Self {
                result: Mutex::new(Some(result)),
            })
        }
    }

    #[async_trait]
    impl DirectionsClient for StubClient {
        async fn directions(
            &self,
            _origin: Coordinate,
            _destination: &Destination,
            _mode: TravelMode,
        ) -> Result<DirectionsRoute, DirectionsError> {
            self.result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(DirectionsError::RequestFailed("called twice".into())))
        }
    }

    fn query() -> DirectionsQuery {
        DirectionsQuery::new(Coordinate::london(), Destination::Address("NW1 6XE".into()))
    }

    fn walking_route() -> DirectionsRoute {
        DirectionsRoute {
            summary: None,
            start_address: Some("Charing Cross".into()),
            end_address: Some("Baker Street".into()),
            distance_text: Some("4.2 km".into()),
            duration_text: Some("50 mins".into()),
            steps: vec![
                RouteStep::basic(TravelMode::Walking, Coordinate::london(), "50 mins").unwrap(),
            ],
        }
    }

    async fn run(result: Result<DirectionsRoute, DirectionsError>) -> Result<Vec<RouteStep>, ApplicationError> {
        DirectionsAdapter::new(StubClient::returning(result))
            .route_steps(&query())
            .await
    }

    #[tokio::test]
    async fn passes_steps_through() {
        let steps = run(Ok(walking_route())).await.unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].travel_mode(), TravelMode::Walking);
    }

    #[tokio::test]
    async fn provider_status_is_preserved() {
        let err = run(Err(DirectionsError::Provider {
            status: "REQUEST_DENIED".into(),
            message: None,
        }))
        .await
        .unwrap_err();
        assert_eq!(err.provider_status(), Some("REQUEST_DENIED"));
    }

    #[tokio::test]
    async fn no_routes_maps_to_zero_results() {
        let err = run(Err(DirectionsError::NoRoutes {
            destination: "NW1 6XE".into(),
        }))
        .await
        .unwrap_err();
        assert_eq!(err.provider_status(), Some("ZERO_RESULTS"));
    }

    #[tokio::test]
    async fn invalid_step_is_a_domain_error() {
        let err = run(Err(DirectionsError::InvalidStep("no details".into())))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidStepKind(_))
        ));
    }

    #[tokio::test]
    async fn transport_failures_are_external() {
        let err = run(Err(DirectionsError::Timeout { timeout_secs: 5 }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = run(Err(DirectionsError::RateLimitExceeded {
            retry_after_secs: None,
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, ApplicationError::RateLimited));
    }
}
