use crate::error::AppError;
use crate::models::{UserLocation, DEFAULT_LOCATION};
use async_trait::async_trait;

/// Device location seam: permission check plus a single fix
///
/// Implemented by the platform shell; the service only ever talks to this
/// trait, so resolution logic stays testable without device APIs.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Whether foreground location permission is currently granted
    async fn has_permission(&self) -> bool;

    /// Request permission from the user; returns the resulting grant state
    async fn request_permission(&self) -> bool;

    /// Fetch one position fix
    async fn current_position(&self) -> Result<UserLocation, AppError>;
}

/// Resolve the user's position, degrading to the default point
///
/// Permission denial and fix failures both fall back to [`DEFAULT_LOCATION`];
/// callers downstream of this boundary never see an absent location.
pub async fn resolve_location(provider: &dyn LocationProvider) -> UserLocation {
    if !provider.has_permission().await && !provider.request_permission().await {
        tracing::warn!("location permission denied, using default location");
        return DEFAULT_LOCATION;
    }

    match provider.current_position().await {
        Ok(location) => {
            tracing::debug!(
                latitude = location.latitude,
                longitude = location.longitude,
                "user location resolved"
            );
            location
        }
        Err(e) => {
            tracing::warn!(error = %e, "location fix failed, using default location");
            DEFAULT_LOCATION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProvider {
        granted: bool,
        grant_on_request: bool,
        position: Result<UserLocation, ()>,
    }

    #[async_trait]
    impl LocationProvider for FakeProvider {
        async fn has_permission(&self) -> bool {
            self.granted
        }

        async fn request_permission(&self) -> bool {
            self.grant_on_request
        }

        async fn current_position(&self) -> Result<UserLocation, AppError> {
            self.position
                .map_err(|_| AppError::LocationUnavailable("no fix".to_string()))
        }
    }

    #[tokio::test]
    async fn test_granted_permission_returns_fix() {
        let provider = FakeProvider {
            granted: true,
            grant_on_request: false,
            position: Ok(UserLocation {
                latitude: 37.51,
                longitude: 127.03,
            }),
        };
        let location = resolve_location(&provider).await;
        assert_eq!(location.latitude, 37.51);
    }

    #[tokio::test]
    async fn test_denied_permission_falls_back() {
        let provider = FakeProvider {
            granted: false,
            grant_on_request: false,
            position: Ok(UserLocation {
                latitude: 0.0,
                longitude: 0.0,
            }),
        };
        let location = resolve_location(&provider).await;
        assert_eq!(location, DEFAULT_LOCATION);
    }

    #[tokio::test]
    async fn test_permission_granted_on_request() {
        let provider = FakeProvider {
            granted: false,
            grant_on_request: true,
            position: Ok(UserLocation {
                latitude: 37.52,
                longitude: 127.04,
            }),
        };
        let location = resolve_location(&provider).await;
        assert_eq!(location.latitude, 37.52);
    }

    #[tokio::test]
    async fn test_fix_failure_falls_back() {
        let provider = FakeProvider {
            granted: true,
            grant_on_request: false,
            position: Err(()),
        };
        let location = resolve_location(&provider).await;
        assert_eq!(location, DEFAULT_LOCATION);
    }
}
