//! Vehicle List Filter
//!
//! Case-insensitive substring search over the afternoon shift table.

use crate::state::models::AfternoonShiftVehicle;

/// Whether any searchable field contains `needle`.
///
/// `needle` must already be lower-cased.
pub fn matches(vehicle: &AfternoonShiftVehicle, needle: &str) -> bool {
    [
        &vehicle.vehicle,
        &vehicle.plate_num,
        &vehicle.device,
        &vehicle.fleet,
        &vehicle.status,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Vehicles matching `term` in their original order
pub fn filter_vehicles(
    vehicles: &[AfternoonShiftVehicle],
    term: &str,
) -> Vec<AfternoonShiftVehicle> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return vehicles.to_vec();
    }

    vehicles
        .iter()
        .filter(|vehicle| matches(vehicle, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(
        id: &str,
        name: &str,
        plate: &str,
        device: &str,
        fleet: &str,
        status: &str,
    ) -> AfternoonShiftVehicle {
        AfternoonShiftVehicle {
            id: id.to_string(),
            vehicle: name.to_string(),
            plate_num: plate.to_string(),
            odometer: "12000".to_string(),
            gps: "GPS-1".to_string(),
            device: device.to_string(),
            sim: "SIM-1".to_string(),
            fleet: fleet.to_string(),
            status: status.to_string(),
        }
    }

    fn sample() -> Vec<AfternoonShiftVehicle> {
        vec![
            vehicle("1", "Truck 12", "KAA-100", "DEV-001", "Fleet-A", "Active"),
            vehicle("2", "Van 3", "KBB-200", "DEV-002", "Fleet-B", "Non-active"),
            vehicle("3", "Bus 7", "KCC-300", "TRK-777", "Fleet-A", "Pending"),
        ]
    }

    fn ids(vehicles: &[AfternoonShiftVehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let vehicles = sample();
        assert_eq!(filter_vehicles(&vehicles, ""), vehicles);
    }

    #[test]
    fn test_case_insensitive() {
        let vehicles = sample();
        let upper = filter_vehicles(&vehicles, "FLEET-A");
        let lower = filter_vehicles(&vehicles, "fleet-a");
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), ["1", "3"]);
    }

    #[test]
    fn test_term_as_typed_is_normalized() {
        let vehicles = sample();
        let typed = filter_vehicles(&vehicles, "Fleet-A");
        assert_eq!(typed, filter_vehicles(&vehicles, "fleet-a"));
        assert_eq!(ids(&typed), ["1", "3"]);
    }

    #[test]
    fn test_matches_any_searchable_field() {
        let vehicles = sample();
        assert_eq!(ids(&filter_vehicles(&vehicles, "van")), ["2"]);
        assert_eq!(ids(&filter_vehicles(&vehicles, "kcc")), ["3"]);
        assert_eq!(ids(&filter_vehicles(&vehicles, "trk-7")), ["3"]);
        assert_eq!(ids(&filter_vehicles(&vehicles, "pend")), ["3"]);
    }

    #[test]
    fn test_status_substring_overlaps() {
        // "active" is contained in "Non-active" as well
        let vehicles = sample();
        assert_eq!(ids(&filter_vehicles(&vehicles, "active")), ["1", "2"]);
    }

    #[test]
    fn test_unsearched_fields_are_ignored() {
        let vehicles = sample();
        assert!(filter_vehicles(&vehicles, "gps-1").is_empty());
        assert!(filter_vehicles(&vehicles, "12000").is_empty());
    }

    #[test]
    fn test_no_tokenization() {
        let vehicles = sample();
        assert!(filter_vehicles(&vehicles, "truck fleet-a").is_empty());
    }

    #[test]
    fn test_source_survives_repeated_filtering() {
        let vehicles = sample();
        let narrowed = filter_vehicles(&vehicles, "bus");
        assert_eq!(narrowed.len(), 1);
        let widened = filter_vehicles(&vehicles, "k");
        assert_eq!(widened.len(), 3);
        assert_eq!(vehicles.len(), 3);
    }
}
