//! Vehicle CSV Export/Import
//!
//! CSV with a header row of camelCase column names, matching the JSON keys.

use serde::Deserialize;

use crate::state::models::AfternoonShiftVehicle;

/// File name offered for downloads
pub const EXPORT_FILE_NAME: &str = "afternoon-shift.csv";

/// Serialize vehicles to CSV text
pub fn vehicles_to_csv(vehicles: &[AfternoonShiftVehicle]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for vehicle in vehicles {
        writer.serialize(vehicle)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Imported row. Every column is read verbatim so ids like `007` keep
/// their leading zeros and long digit runs are never parsed as numbers.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VehicleRow {
    id: String,
    vehicle: String,
    plate_num: String,
    odometer: String,
    gps: String,
    device: String,
    sim: String,
    fleet: String,
    status: String,
}

impl From<VehicleRow> for AfternoonShiftVehicle {
    fn from(row: VehicleRow) -> Self {
        Self {
            id: row.id,
            vehicle: row.vehicle,
            plate_num: row.plate_num,
            odometer: row.odometer,
            gps: row.gps,
            device: row.device,
            sim: row.sim,
            fleet: row.fleet,
            status: row.status,
        }
    }
}

/// Parse CSV text into vehicles; any bad row fails the whole import
pub fn vehicles_from_csv(text: &str) -> Result<Vec<AfternoonShiftVehicle>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
        .deserialize::<VehicleRow>()
        .map(|row| row.map(AfternoonShiftVehicle::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck() -> AfternoonShiftVehicle {
        AfternoonShiftVehicle {
            id: "1".to_string(),
            vehicle: "Truck 12".to_string(),
            plate_num: "KAA-100".to_string(),
            odometer: "10200".to_string(),
            gps: "GPS-1".to_string(),
            device: "DEV-001".to_string(),
            sim: "0711".to_string(),
            fleet: "Fleet-A".to_string(),
            status: "Active".to_string(),
        }
    }

    #[test]
    fn test_export_has_camel_case_header() {
        let csv = vehicles_to_csv(&[truck()]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("id,vehicle,plateNum,odometer,gps,device,sim,fleet,status")
        );
        assert_eq!(
            lines.next(),
            Some("1,Truck 12,KAA-100,10200,GPS-1,DEV-001,0711,Fleet-A,Active")
        );
    }

    #[test]
    fn test_export_quotes_commas() {
        let mut vehicle = truck();
        vehicle.status = "Parked, idle".to_string();
        let csv = vehicles_to_csv(&[vehicle]).unwrap();
        assert!(csv.contains("\"Parked, idle\""));
    }

    #[test]
    fn test_import_reads_exported_layout() {
        let text = "id,vehicle,plateNum,odometer,gps,device,sim,fleet,status\n\
                    7, Bus 7 ,KCC-300,5000,GPS-3,TRK-777,0722,Fleet-A,Pending\n";
        let vehicles = vehicles_from_csv(text).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, "7");
        assert_eq!(vehicles[0].vehicle, "Bus 7");
        assert_eq!(vehicles[0].device, "TRK-777");
    }

    #[test]
    fn test_import_tolerates_missing_columns() {
        let vehicles = vehicles_from_csv("id,vehicle,status\n9,Van 9,Active\n").unwrap();
        assert_eq!(vehicles[0].plate_num, "");
        assert_eq!(vehicles[0].status, "Active");
    }

    #[test]
    fn test_import_rejects_ragged_rows() {
        assert!(vehicles_from_csv("id,vehicle\n1,Truck,extra\n").is_err());
    }

    #[test]
    fn test_numeric_looking_ids_survive_export_and_import() {
        let mut padded = truck();
        padded.id = "007".to_string();
        let mut long = truck();
        long.id = "12345678901234567890123".to_string();

        let csv = vehicles_to_csv(&[padded, long]).unwrap();
        let imported = vehicles_from_csv(&csv).unwrap();

        let ids: Vec<&str> = imported.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["007", "12345678901234567890123"]);
        assert_eq!(imported[0].sim, "0711");
    }
}
