// src/directions.rs
use serde::Serialize;

use crate::models::{CandidatePoint, Coordinate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TravelMode {
    Driving,
}

/// Request handed to the routing service when a house marker is selected.
/// The route runs from the house to the address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub travel_mode: TravelMode,
}

impl DirectionsRequest {
    pub fn to_candidate(address: Coordinate, candidate: &CandidatePoint) -> Self {
        Self {
            origin: candidate.location(),
            destination: address,
            travel_mode: TravelMode::Driving,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proximity::generate_candidates;

    #[test]
    fn test_request_runs_from_house_to_address() {
        let address = Coordinate::new(43.0, -80.0).unwrap();
        let houses = generate_candidates(address, 3, 0.5, Some(2)).unwrap();
        let request = DirectionsRequest::to_candidate(address, &houses[1]);

        assert_eq!(request.origin, houses[1].location());
        assert_eq!(request.destination, address);

        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["travelMode"], "DRIVING");
        assert_eq!(json["destination"]["lng"], -80.0);
    }
}
