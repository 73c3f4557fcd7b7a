use async_trait::async_trait;
use wayfare_rs_providers::{Position, PositionError, PositionOptions, PositionSource};

/// Position source that always reports the same coordinates.
#[derive(Debug, Clone)]
pub struct FixedPositionSource {
    position: Position,
}

impl FixedPositionSource {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Position {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl PositionSource for FixedPositionSource {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        Ok(self.position)
    }
}

/// Position source that always reports the given error.
#[derive(Debug, Clone)]
pub struct FailingPositionSource {
    error: PositionError,
}

impl FailingPositionSource {
    pub fn new(error: PositionError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl PositionSource for FailingPositionSource {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        Err(self.error)
    }
}
