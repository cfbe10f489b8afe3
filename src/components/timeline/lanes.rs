//! Greedy lane assignment for ranged events whose horizontal spans collide.
//!
//! Events are sorted by their left edge and each one goes into the first lane
//! whose previous occupant ends early enough, opening a new lane otherwise.
//! The resulting assignment is deterministic for any input permutation
//! because ties on the left edge are broken by id.

use std::collections::HashMap;

use crate::content::TimelineEvent;

use super::position::{range_position, Axis};

/// Minimum horizontal spacing between two bars in the same lane, in percent
/// of the track width. Bars closer than this stack into separate lanes.
pub const MIN_GAP: f64 = 0.5;

/// Vertical pixel offset between consecutive lanes.
pub const LANE_OFFSET_PX: f64 = 12.0;
/// Vertical pixels reserved per lane when sizing the bar region.
pub const LANE_SLOT_PX: f64 = 16.0;
/// Floor for the bar region height.
pub const REGION_MIN_PX: f64 = 64.0;

/// Derived mapping from event id to lane index, plus the lane count used to
/// size the vertical layout region. Recomputed only when the event list
/// changes, which for a static catalog is once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaneLayout {
    assignments: HashMap<String, usize>,
    pub lane_count: usize,
}

impl LaneLayout {
    pub fn lane(&self, id: &str) -> usize {
        self.assignments.get(id).copied().unwrap_or(0)
    }

    pub fn offset_px(&self, id: &str) -> f64 {
        self.lane(id) as f64 * LANE_OFFSET_PX
    }

    pub fn region_height_px(&self) -> f64 {
        (self.lane_count as f64 * LANE_SLOT_PX).max(REGION_MIN_PX)
    }
}

pub fn assign_lanes(events: &[TimelineEvent], axis: Axis) -> LaneLayout {
    let mut boxes: Vec<(&str, f64, f64)> = events
        .iter()
        .map(|event| {
            let span = range_position(event.start(), event.end(), axis);
            (event.id.as_str(), span.left, span.end())
        })
        .collect();
    boxes.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut lane_ends: Vec<f64> = Vec::new();
    let mut assignments = HashMap::new();
    for (id, start, end) in boxes {
        let mut placed = false;
        for (lane, lane_end) in lane_ends.iter_mut().enumerate() {
            if start >= *lane_end + MIN_GAP {
                assignments.insert(id.to_string(), lane);
                *lane_end = end;
                placed = true;
                break;
            }
        }
        if !placed {
            assignments.insert(id.to_string(), lane_ends.len());
            lane_ends.push(end);
        }
    }

    LaneLayout {
        assignments,
        lane_count: lane_ends.len().max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EventCategory;

    const AXIS: Axis = Axis {
        start_year: 2019,
        end_year: 2027,
    };

    fn event(id: &str, start_year: i32, start_month: u32, end: Option<(i32, u32)>) -> TimelineEvent {
        TimelineEvent {
            id: id.into(),
            title: id.into(),
            subtitle: String::new(),
            description: String::new(),
            category: EventCategory::Work,
            start_year,
            start_month,
            end_year: end.map(|(y, _)| y),
            end_month: end.map(|(_, m)| m),
            location: None,
            current: end.is_none(),
        }
    }

    #[test]
    fn test_overlapping_events_get_distinct_lanes() {
        // A spans roughly [10%, 40%]; B starts inside it, so B cannot share
        // lane 0.
        let events = vec![
            event("a", 2019, 10, Some((2022, 2))),
            event("b", 2021, 9, Some((2023, 6))),
        ];
        let layout = assign_lanes(&events, AXIS);
        assert_eq!(layout.lane("a"), 0);
        assert_eq!(layout.lane("b"), 1);
        assert_eq!(layout.lane_count, 2);
    }

    #[test]
    fn test_disjoint_events_share_a_lane() {
        let events = vec![
            event("a", 2019, 0, Some((2020, 0))),
            event("b", 2024, 0, Some((2025, 0))),
        ];
        let layout = assign_lanes(&events, AXIS);
        assert_eq!(layout.lane("a"), 0);
        assert_eq!(layout.lane("b"), 0);
        assert_eq!(layout.lane_count, 1);
    }

    #[test]
    fn test_same_lane_events_respect_min_gap() {
        let events: Vec<TimelineEvent> = (0..6)
            .map(|i| {
                let start = 2019 + i;
                event(&format!("e{i}"), start, 0, Some((start, 11)))
            })
            .collect();
        let layout = assign_lanes(&events, AXIS);

        // Reconstruct intervals and check the packing guarantee per lane.
        let mut by_lane: HashMap<usize, Vec<(f64, f64)>> = HashMap::new();
        for e in &events {
            let span = range_position(e.start(), e.end(), AXIS);
            by_lane
                .entry(layout.lane(&e.id))
                .or_default()
                .push((span.left, span.end()));
        }
        for intervals in by_lane.values_mut() {
            intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
            for pair in intervals.windows(2) {
                assert!(
                    pair[1].0 >= pair[0].1 + MIN_GAP,
                    "lane-mates overlap: {pair:?}"
                );
            }
        }
    }

    #[test]
    fn test_assignment_deterministic_across_input_order() {
        let mut events = vec![
            event("a", 2019, 10, Some((2022, 2))),
            event("b", 2021, 9, Some((2023, 6))),
            event("c", 2023, 0, None),
            event("d", 2019, 0, Some((2019, 5))),
        ];
        let forward = assign_lanes(&events, AXIS);
        events.reverse();
        let backward = assign_lanes(&events, AXIS);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_input_still_reports_one_lane() {
        let layout = assign_lanes(&[], AXIS);
        assert_eq!(layout.lane_count, 1);
        assert_eq!(layout.lane("missing"), 0);
        assert!((layout.region_height_px() - REGION_MIN_PX).abs() < 1e-9);
    }

    #[test]
    fn test_region_height_grows_with_lanes() {
        // Five mutually overlapping ongoing events force five lanes.
        let events: Vec<TimelineEvent> = (0..5)
            .map(|i| event(&format!("e{i}"), 2020 + i, 0, None))
            .collect();
        let layout = assign_lanes(&events, AXIS);
        assert_eq!(layout.lane_count, 5);
        assert!((layout.region_height_px() - 5.0 * LANE_SLOT_PX).abs() < 1e-9);
    }

    #[test]
    fn test_touching_events_separated_by_gap_rule() {
        // B starts exactly where A ends; without the gap they would visually
        // touch, so B moves to the next lane.
        let events = vec![
            event("a", 2019, 0, Some((2020, 11))),
            event("b", 2021, 0, Some((2022, 11))),
        ];
        let layout = assign_lanes(&events, AXIS);
        let a = range_position(events[0].start(), events[0].end(), AXIS);
        let b = range_position(events[1].start(), events[1].end(), AXIS);
        if b.left < a.end() + MIN_GAP {
            assert_ne!(layout.lane("a"), layout.lane("b"));
        } else {
            assert_eq!(layout.lane("a"), layout.lane("b"));
        }
    }
}
