//! Travel-time model shared by both search strategies.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{LineId, NetworkGraph, StationId};
use crate::path::JourneyStop;

/// Train speed used to convert distances into travel time.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Time charged once for every change of line along a journey.
pub const DEFAULT_TRANSFER_MINUTES: f64 = 4.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Converts distances into hours and prices line changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostModel {
    speed_kmh: f64,
    transfer_penalty_hours: f64,
}

impl CostModel {
    /// Create a cost model from a speed and a transfer penalty in minutes.
    pub fn new(speed_kmh: f64, transfer_minutes: f64) -> Result<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(Error::InvalidCostModel {
                message: format!("speed must be a positive number of km/h, got {speed_kmh}"),
            });
        }
        if !transfer_minutes.is_finite() || transfer_minutes < 0.0 {
            return Err(Error::InvalidCostModel {
                message: format!(
                    "transfer penalty must be a non-negative number of minutes, got {transfer_minutes}"
                ),
            });
        }

        Ok(Self {
            speed_kmh,
            transfer_penalty_hours: transfer_minutes / MINUTES_PER_HOUR,
        })
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn transfer_penalty_hours(&self) -> f64 {
        self.transfer_penalty_hours
    }

    /// Hours needed to cover `distance_km` at the configured speed.
    pub fn travel_time(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh
    }

    /// Penalty for moving from line `from` onto line `to`. Lines are compared by identity only.
    pub fn transfer_penalty(&self, from: LineId, to: LineId) -> f64 {
        if from == to {
            0.0
        } else {
            self.transfer_penalty_hours
        }
    }

    /// Total travel time of a station sequence, ignoring lines.
    ///
    /// Fails with [`Error::MissingEdge`] when two consecutive stations are not
    /// directly connected, which means the path did not come from `graph`.
    pub fn route_hours(&self, graph: &NetworkGraph, steps: &[StationId]) -> Result<f64> {
        steps.windows(2).try_fold(0.0, |total, pair| {
            let distance = edge_distance(graph, pair[0], pair[1])?;
            Ok(total + self.travel_time(distance))
        })
    }

    /// Total time of a line-annotated journey, including one penalty per line change.
    pub fn journey_hours(&self, graph: &NetworkGraph, stops: &[JourneyStop]) -> Result<f64> {
        stops.windows(2).try_fold(0.0, |total, pair| {
            let distance = edge_distance(graph, pair[0].station, pair[1].station)?;
            Ok(total
                + self.travel_time(distance)
                + self.transfer_penalty(pair[0].line, pair[1].line))
        })
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            transfer_penalty_hours: DEFAULT_TRANSFER_MINUTES / MINUTES_PER_HOUR,
        }
    }
}

pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * MINUTES_PER_HOUR
}

fn edge_distance(graph: &NetworkGraph, from: StationId, to: StationId) -> Result<f64> {
    graph.distance(from, to).ok_or_else(|| Error::MissingEdge {
        from: graph.station_label(from),
        to: graph.station_label(to),
    })
}
