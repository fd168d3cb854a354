use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;

use serde::Serialize;
use tracing::debug;

use crate::cost::CostModel;
use crate::error::{Error, Result};
use crate::graph::{LineId, NetworkGraph, StationId};
use crate::routing::RouteAlgorithm;

/// Default cap on the number of states a single search may expand.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Bounds applied to a single search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of queue pops before the search gives up. `None` disables the cap.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// Limits that never stop a search early.
    pub fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    fn check(&self, expanded: usize, algorithm: RouteAlgorithm) -> Result<()> {
        match self.max_expansions {
            Some(limit) if expanded > limit => Err(Error::SearchLimitExceeded { algorithm, limit }),
            _ => Ok(()),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: Some(DEFAULT_MAX_EXPANSIONS),
        }
    }
}

/// A station reached while riding a particular line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct JourneyStop {
    pub station: StationId,
    pub line: LineId,
}

/// Minimum-time journey produced by [`find_journey`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journey {
    pub stops: Vec<JourneyStop>,
    /// Travel time plus transfer penalties, in hours.
    pub total_hours: f64,
}

impl Journey {
    /// Number of line changes between consecutive stops.
    pub fn transfers(&self) -> usize {
        self.stops
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }

    /// The visited stations without line annotations.
    pub fn stations(&self) -> Vec<StationId> {
        self.stops.iter().map(|stop| stop.station).collect()
    }

    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// Total hours of an optional journey, with a missing journey costing infinity.
pub fn journey_hours_or_infinite(journey: Option<&Journey>) -> f64 {
    journey.map_or(f64::INFINITY, |journey| journey.total_hours)
}

/// Find a route between two station tokens using breadth-first search without
/// an expansion cap. Unknown tokens yield `None`.
pub fn find_route(graph: &NetworkGraph, from: &str, to: &str) -> Option<Vec<StationId>> {
    let start = graph.station_id(from)?;
    let goal = graph.station_id(to)?;
    find_route_bfs(graph, start, goal, &SearchLimits::unbounded())
        .ok()
        .flatten()
}

/// Run breadth-first search, returning the first path that reaches `goal`.
///
/// Every queue entry carries its whole path. A station is marked visited when
/// it is dequeued, and neighbours already on the current path are skipped, so
/// the result is shortest by hop count but not by distance. Among equal-hop
/// paths the one whose stations appear earliest in neighbour order wins.
pub fn find_route_bfs(
    graph: &NetworkGraph,
    start: StationId,
    goal: StationId,
    limits: &SearchLimits,
) -> Result<Option<Vec<StationId>>> {
    let mut visited: HashSet<StationId> = HashSet::new();
    let mut queue = VecDeque::new();
    let mut expanded = 0usize;

    queue.push_back(Trail::root(start));

    while let Some(trail) = queue.pop_front() {
        expanded += 1;
        limits.check(expanded, RouteAlgorithm::Blind)?;

        let current = trail.item;
        if current == goal {
            let route = trail.to_vec();
            debug!(expanded, hops = route.len() - 1, "blind search reached goal");
            return Ok(Some(route));
        }

        visited.insert(current);

        for edge in graph.neighbours(current) {
            let next = edge.target;
            if visited.contains(&next) || trail.contains(&next) {
                continue;
            }
            queue.push_back(trail.extend(next));
        }
    }

    debug!(expanded, "blind search exhausted the queue");
    Ok(None)
}

/// Find the fastest journey between station tokens without an expansion cap.
///
/// Unknown stations or an unknown starting line yield `None`.
pub fn find_fastest_journey(
    graph: &NetworkGraph,
    cost: &CostModel,
    from: &str,
    line: &str,
    to: &str,
) -> Option<Journey> {
    let start = graph.station_id(from)?;
    let start_line = graph.line_id(line)?;
    let goal = graph.station_id(to)?;
    find_journey(
        graph,
        cost,
        start,
        start_line,
        goal,
        &SearchLimits::unbounded(),
    )
    .ok()
    .flatten()
}

/// Run uniform-cost search over `(station, line)` states.
///
/// Moving to a neighbour on any of its lines costs the travel time of the edge
/// plus a transfer penalty when the line differs from the current one. A state
/// is settled the first time it is popped, and the first settled state at
/// `goal` (on any line) is a minimum-time journey. Equal costs are ordered by
/// station id, then line id, then insertion order.
pub fn find_journey(
    graph: &NetworkGraph,
    cost: &CostModel,
    start: StationId,
    start_line: LineId,
    goal: StationId,
    limits: &SearchLimits,
) -> Result<Option<Journey>> {
    let mut settled: HashSet<JourneyStop> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    let mut expanded = 0usize;

    let origin = JourneyStop {
        station: start,
        line: start_line,
    };
    queue.push(JourneyEntry::new(0.0, Trail::root(origin), sequence));

    while let Some(entry) = queue.pop() {
        let stop = entry.trail.item;
        if !settled.insert(stop) {
            continue;
        }

        expanded += 1;
        limits.check(expanded, RouteAlgorithm::Heuristic)?;

        let elapsed = entry.cost.0;
        if stop.station == goal {
            let journey = Journey {
                stops: entry.trail.to_vec(),
                total_hours: elapsed,
            };
            debug!(
                expanded,
                hops = journey.hop_count(),
                transfers = journey.transfers(),
                hours = elapsed,
                "heuristic search reached goal"
            );
            return Ok(Some(journey));
        }

        for edge in graph.neighbours(stop.station) {
            let travel = cost.travel_time(edge.distance_km);
            for &next_line in graph.lines_of(edge.target) {
                let next = JourneyStop {
                    station: edge.target,
                    line: next_line,
                };
                if settled.contains(&next) {
                    continue;
                }

                sequence += 1;
                let next_cost = elapsed + travel + cost.transfer_penalty(stop.line, next_line);
                queue.push(JourneyEntry::new(
                    next_cost,
                    entry.trail.extend(next),
                    sequence,
                ));
            }
        }
    }

    debug!(expanded, "heuristic search exhausted the queue");
    Ok(None)
}

/// Append-only path history shared between queue entries.
#[derive(Debug)]
struct Trail<T> {
    item: T,
    parent: Option<Rc<Trail<T>>>,
    len: usize,
}

impl<T: Copy + PartialEq> Trail<T> {
    fn root(item: T) -> Rc<Self> {
        Rc::new(Self {
            item,
            parent: None,
            len: 1,
        })
    }

    fn extend(self: &Rc<Self>, item: T) -> Rc<Self> {
        Rc::new(Self {
            item,
            parent: Some(Rc::clone(self)),
            len: self.len + 1,
        })
    }

    fn iter(&self) -> impl Iterator<Item = &Trail<T>> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }

    fn contains(&self, item: &T) -> bool {
        self.iter().any(|node| node.item == *item)
    }

    fn to_vec(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        items.extend(self.iter().map(|node| node.item));
        items.reverse();
        items
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug)]
struct JourneyEntry {
    cost: FloatOrd,
    trail: Rc<Trail<JourneyStop>>,
    sequence: u64,
}

impl JourneyEntry {
    fn new(cost: f64, trail: Rc<Trail<JourneyStop>>, sequence: u64) -> Self {
        Self {
            cost: FloatOrd(cost),
            trail,
            sequence,
        }
    }
}

impl Ord for JourneyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap on every key.
        let (mine, theirs) = (self.trail.item, other.trail.item);
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| theirs.station.cmp(&mine.station))
            .then_with(|| theirs.line.cmp(&mine.line))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for JourneyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for JourneyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for JourneyEntry {}
