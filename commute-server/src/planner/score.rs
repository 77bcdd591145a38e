//! Commute scoring.
//!
//! Two separately calibrated scores live here:
//!
//! - [`advanced_commute_score`] rates a completed route against the
//!   caller's priority. It is what the route finder ranks by.
//! - [`quick_commute_score`] is a four-factor estimate for a single leg,
//!   used where no full route is available.
//!
//! The two are not expected to agree on the same input.

use crate::domain::{CompleteRoute, Priority, RouteOptions};

use super::complete::round_half_up;

/// Total time, in minutes, of a commute that takes no time penalty.
const REFERENCE_TIME_MINS: f64 = 45.0;

/// Fare at which the fare penalty starts.
const REFERENCE_FARE: f64 = 300.0;

/// Round and clamp an accumulated score into `0..=100`.
fn finish(score: f64) -> u32 {
    round_half_up(score).clamp(0.0, 100.0) as u32
}

/// Score a completed route from 0 (worst) to 100 (best).
///
/// Starts at 100 and applies, in order: a time penalty beyond 45
/// minutes, 8 points per transfer, a walking penalty beyond 8 minutes, a
/// frequency bonus (negative below 8 trips/hour, capped at +15), half a
/// point per waiting minute, a fare penalty beyond 300, and finally the
/// adjustment for `options.prioritize`.
pub fn advanced_commute_score(route: &CompleteRoute, options: &RouteOptions) -> u32 {
    let total_time = f64::from(route.total_time);
    let total_fare = f64::from(route.total_fare);
    let transfers = f64::from(route.transfers);

    let mut score = 100.0;

    let time_ratio = total_time / REFERENCE_TIME_MINS;
    score -= ((time_ratio - 1.0) * 25.0).max(0.0);

    score -= transfers * 8.0;

    score -= ((f64::from(route.walking_time) - 8.0) * 0.8).max(0.0);

    score += ((route.average_frequency() - 8.0) * 1.5).min(15.0);

    score -= f64::from(route.waiting_time) * 0.5;

    let fare_ratio = total_fare / REFERENCE_FARE;
    score -= ((fare_ratio - 1.0) * 5.0).max(0.0);

    match options.prioritize {
        Priority::Time => score -= (total_time - 30.0) * 0.8,
        Priority::Cost => score -= (total_fare - 200.0) * 0.1,
        Priority::Transfers => score -= transfers * 15.0,
        Priority::Comfort => {}
    }

    finish(score)
}

/// Quick single-leg estimate from 0 (worst) to 100 (best).
///
/// Uses a 60 minute reference time, a 6 trips/hour reference frequency
/// (bonus capped at +20), 10 points per transfer and a walking penalty
/// beyond 10 minutes.
pub fn quick_commute_score(
    total_time: u32,
    frequency: u32,
    transfers: u32,
    walking_time: u32,
) -> u32 {
    let mut score = 100.0;

    let time_ratio = (f64::from(total_time) / 60.0).max(0.1);
    score -= (time_ratio - 1.0) * 30.0;

    score += ((f64::from(frequency) - 6.0) * 2.0).min(20.0);

    score -= f64::from(transfers) * 10.0;

    score -= ((f64::from(walking_time) - 10.0) * 0.5).max(0.0);

    finish(score)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{LineId, LineRef, RouteSegment, StationId, StationRef};
    use proptest::prelude::*;

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Time),
            Just(Priority::Cost),
            Just(Priority::Transfers),
            Just(Priority::Comfort),
        ]
    }

    fn route_strategy() -> impl Strategy<Value = CompleteRoute> {
        (
            prop::collection::vec(1u32..200, 1..3),
            0u32..20_000,
            0u32..200_000,
            0u32..1_000,
            0u32..500,
        )
            .prop_map(|(freqs, total_time, total_fare, walking_time, waiting_time)| {
                let segments: Vec<RouteSegment> = freqs
                    .iter()
                    .map(|&freq| RouteSegment {
                        departure: StationRef {
                            id: StationId::parse("a").unwrap(),
                            name: "A".into(),
                        },
                        arrival: StationRef {
                            id: StationId::parse("b").unwrap(),
                            name: "B".into(),
                        },
                        line: LineRef {
                            id: LineId::parse("l").unwrap(),
                            name: "L".into(),
                            operator: "Op".into(),
                            frequency_weekday: freq,
                        },
                        travel_time: 1,
                        distance: 1.0,
                        fare: 0,
                    })
                    .collect();
                let transfers = (segments.len() - 1) as u32;
                CompleteRoute {
                    segments,
                    total_time,
                    total_fare,
                    total_distance: 1.0,
                    transfers,
                    walking_time,
                    train_time: 0,
                    waiting_time,
                    commute_score: 0,
                }
            })
    }

    proptest! {
        #[test]
        fn advanced_score_in_range(route in route_strategy(), priority in priority_strategy()) {
            let options = RouteOptions::default().with_priority(priority);
            let score = advanced_commute_score(&route, &options);
            prop_assert!(score <= 100);
        }

        #[test]
        fn quick_score_in_range(
            total_time in 0u32..100_000,
            frequency in 0u32..1_000,
            transfers in 0u32..50,
            walking_time in 0u32..10_000,
        ) {
            prop_assert!(quick_commute_score(total_time, frequency, transfers, walking_time) <= 100);
        }

        #[test]
        fn longer_walk_never_scores_higher(route in route_strategy(), extra in 1u32..100) {
            let options = RouteOptions::default();
            let mut longer = route.clone();
            longer.walking_time += extra;
            prop_assert!(
                advanced_commute_score(&longer, &options) <= advanced_commute_score(&route, &options)
            );
        }
    }
}
