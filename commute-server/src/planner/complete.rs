//! Route completion.
//!
//! Turns a raw segment path into a `CompleteRoute` with time, fare,
//! distance, transfer and waiting aggregates. Waiting time assumes a
//! passenger arriving at random on a fixed-headway line, so the expected
//! wait is half the headway.

use crate::domain::{CompleteRoute, RouteSegment, TimeOfDay};

use super::error::RouteError;

/// Round to the nearest integer, halves rounding up.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Expected wait in minutes for one segment.
///
/// In the morning the wait never drops below one minute.
fn segment_wait(segment: &RouteSegment, time_of_day: TimeOfDay) -> Result<f64, RouteError> {
    let frequency = segment.line.frequency_weekday;
    if frequency == 0 {
        return Err(RouteError::InvalidFrequency {
            line: segment.line.id.clone(),
        });
    }

    let wait = 60.0 / f64::from(frequency) / 2.0;
    Ok(match time_of_day {
        TimeOfDay::Morning => wait.max(1.0),
        TimeOfDay::Evening | TimeOfDay::Daytime => wait,
    })
}

/// Compute all aggregates for a raw path.
///
/// `transfer_mins` is charged once per change of line and folded into
/// `total_time` only. Waiting time and total time are each rounded once,
/// from unrounded sums. The returned route is unscored.
pub fn complete_route(
    segments: Vec<RouteSegment>,
    walking_time: u32,
    time_of_day: TimeOfDay,
    transfer_mins: u32,
) -> Result<CompleteRoute, RouteError> {
    if segments.is_empty() {
        return Err(RouteError::EmptyPath);
    }

    let train_time: u32 = segments.iter().map(|s| s.travel_time).sum();
    let total_fare: u32 = segments.iter().map(|s| s.fare).sum();
    let distance: f64 = segments.iter().map(|s| s.distance).sum();
    let transfers = (segments.len() - 1) as u32;

    let mut waiting = 0.0;
    for segment in &segments {
        waiting += segment_wait(segment, time_of_day)?;
    }

    let transfer_time = transfers * transfer_mins;
    let total = f64::from(train_time) + f64::from(walking_time) + waiting + f64::from(transfer_time);

    Ok(CompleteRoute {
        segments,
        total_time: round_half_up(total) as u32,
        total_fare,
        total_distance: round_half_up(distance * 10.0) / 10.0,
        transfers,
        walking_time,
        train_time,
        waiting_time: round_half_up(waiting) as u32,
        commute_score: 0,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{LineId, LineRef, StationId, StationRef};
    use proptest::prelude::*;

    fn segment_strategy() -> impl Strategy<Value = RouteSegment> {
        (0u32..120, 1u32..60, 0.0f64..50.0, 0u32..1000).prop_map(
            |(travel_time, freq, distance, fare)| RouteSegment {
                departure: StationRef {
                    id: StationId::parse("a").unwrap(),
                    name: "A".into(),
                },
                arrival: StationRef {
                    id: StationId::parse("b").unwrap(),
                    name: "B".into(),
                },
                line: LineRef {
                    id: LineId::parse(format!("l{freq}")).unwrap(),
                    name: "Line".into(),
                    operator: "Op".into(),
                    frequency_weekday: freq,
                },
                travel_time,
                distance,
                fare,
            },
        )
    }

    fn time_of_day_strategy() -> impl Strategy<Value = TimeOfDay> {
        prop_oneof![
            Just(TimeOfDay::Morning),
            Just(TimeOfDay::Evening),
            Just(TimeOfDay::Daytime),
        ]
    }

    proptest! {
        #[test]
        fn transfers_is_segments_minus_one(
            segments in prop::collection::vec(segment_strategy(), 1..3),
            walking in 0u32..30,
            tod in time_of_day_strategy(),
        ) {
            let len = segments.len();
            let route = complete_route(segments, walking, tod, 3).unwrap();
            prop_assert_eq!(route.transfers as usize, len - 1);
        }

        #[test]
        fn total_time_is_rounded_sum(
            segments in prop::collection::vec(segment_strategy(), 1..3),
            walking in 0u32..30,
            tod in time_of_day_strategy(),
        ) {
            let waits: f64 = segments
                .iter()
                .map(|s| {
                    let w = 60.0 / f64::from(s.line.frequency_weekday) / 2.0;
                    if tod == TimeOfDay::Morning { w.max(1.0) } else { w }
                })
                .sum();
            let route = complete_route(segments, walking, tod, 3).unwrap();

            let expected = f64::from(route.train_time)
                + f64::from(route.walking_time)
                + waits
                + f64::from(3 * route.transfers);
            prop_assert_eq!(route.total_time, round_half_up(expected) as u32);
            prop_assert_eq!(route.waiting_time, round_half_up(waits) as u32);
        }
    }
}
