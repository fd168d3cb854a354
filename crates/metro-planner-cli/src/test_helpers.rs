// Test utilities used across `metro-planner-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use metro_planner_lib::RouteStep;

/// Builder for tests that constructs `RouteStep` with sensible defaults.
pub struct RouteStepBuilder {
    step: RouteStep,
}

impl RouteStepBuilder {
    /// Create a builder populated with default values.
    pub fn new() -> Self {
        Self {
            step: RouteStep {
                index: 1,
                id: 1,
                name: Some("Step 1".to_string()),
                line: None,
                transfer: false,
                distance_km: Some(1.0),
            },
        }
    }

    /// Set the position in the route; the station id follows it.
    pub fn index(mut self, idx: usize) -> Self {
        self.step.index = idx;
        self.step.id = idx;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.step.name = Some(name.to_string());
        self
    }

    pub fn line(mut self, line: &str) -> Self {
        self.step.line = Some(line.to_string());
        self
    }

    pub fn transfer(mut self) -> Self {
        self.step.transfer = true;
        self
    }

    /// First stops carry no distance from a previous station.
    pub fn no_distance(mut self) -> Self {
        self.step.distance_km = None;
        self
    }

    pub fn build(self) -> RouteStep {
        self.step
    }
}

impl Default for RouteStepBuilder {
    fn default() -> Self {
        Self::new()
    }
}
