//! Step-by-step itineraries for display.

use crate::domain::CompleteRoute;

/// Minutes shown for each change of line.
pub const TRANSFER_STEP_MINS: u32 = 3;

/// The kind of an itinerary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Train,
    Transfer,
    Walk,
}

/// One instruction in an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub description: String,
    /// Minutes.
    pub time: u32,
    /// Line name; for transfers, "from line → to line".
    pub line: Option<String>,
    pub operator: Option<String>,
    pub fare: Option<u32>,
}

impl Step {
    fn train(description: String, time: u32, line: &str, operator: &str, fare: u32) -> Self {
        Self {
            kind: StepKind::Train,
            description,
            time,
            line: Some(line.to_string()),
            operator: Some(operator.to_string()),
            fare: Some(fare),
        }
    }

    fn transfer(description: String, line: String) -> Self {
        Self {
            kind: StepKind::Transfer,
            description,
            time: TRANSFER_STEP_MINS,
            line: Some(line),
            operator: None,
            fare: None,
        }
    }

    fn walk(description: String, time: u32) -> Self {
        Self {
            kind: StepKind::Walk,
            description,
            time,
            line: None,
            operator: None,
            fare: None,
        }
    }
}

/// Build the itinerary for a route ending at `destination_name`.
///
/// Emits one train step per segment with a transfer step between
/// consecutive segments, then a walk step if the route includes walking.
pub fn itinerary(route: &CompleteRoute, destination_name: &str) -> Vec<Step> {
    let mut steps = Vec::with_capacity(route.segments.len() * 2 + 1);

    for (i, segment) in route.segments.iter().enumerate() {
        if i > 0 {
            let previous = &route.segments[i - 1];
            steps.push(Step::transfer(
                format!("Change at {}", segment.departure.name),
                format!("{} → {}", previous.line.name, segment.line.name),
            ));
        }

        steps.push(Step::train(
            format!("{} → {}", segment.departure.name, segment.arrival.name),
            segment.travel_time,
            &segment.line.name,
            &segment.line.operator,
            segment.fare,
        ));
    }

    if route.walking_time > 0 {
        if let Some(last) = route.destination() {
            steps.push(Step::walk(
                format!("Walk from {} to {}", last.name, destination_name),
                route.walking_time,
            ));
        }
    }

    steps
}
