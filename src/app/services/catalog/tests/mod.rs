//! Shared test utilities and fixtures for catalog tests

use crate::app::models::{CloseApproach, NeoAttributes};
use crate::app::services::catalog::NeoCatalog;
use std::fs;
use std::path::{Path, PathBuf};


/// Create test attributes for an object
pub fn create_test_attributes(name: &str, is_hazardous: bool, diameter_min: f64) -> NeoAttributes {
    NeoAttributes {
        id: format!("37{}", name.len()),
        neo_reference_id: format!("37{}", name.len()),
        name: name.to_string(),
        nasa_jpl_url: format!("https://ssd.jpl.nasa.gov/sbdb.cgi?sstr={name}"),
        absolute_magnitude_h: 22.1,
        est_diameter_min_km: diameter_min,
        est_diameter_max_km: diameter_min * 2.0,
        is_hazardous,
    }
}

/// Create a test close approach consistent with the given attributes
pub fn create_test_approach(
    attributes: &NeoAttributes,
    date: &str,
    miss_distance_km: f64,
) -> CloseApproach {
    CloseApproach {
        neo_name: attributes.name.clone(),
        close_approach_date: date.to_string(),
        close_approach_date_full: format!("{date} 12:00"),
        kilometers_per_second: 14.0,
        kilometers_per_hour: 50400.0,
        miss_distance_astronomical: miss_distance_km / 149_597_870.7,
        miss_distance_lunar: miss_distance_km / 384_400.0,
        miss_distance_kilometers: miss_distance_km,
        miss_distance_miles: miss_distance_km * 0.621_371,
        est_diameter_min_km: attributes.est_diameter_min_km,
        est_diameter_max_km: attributes.est_diameter_max_km,
        is_hazardous: attributes.is_hazardous,
    }
}

/// Register one approach for the named object with default attributes
pub fn register_approach(
    catalog: &mut NeoCatalog,
    name: &str,
    date: &str,
    is_hazardous: bool,
    miss_distance_km: f64,
) {
    let attributes = create_test_attributes(name, is_hazardous, 0.1);
    let approach = create_test_approach(&attributes, date, miss_distance_km);
    catalog.register(approach, attributes).unwrap();
}

/// Build the standard three-event test catalog
///
/// Two approaches on 2020-01-01 (one hazardous, one not) and one
/// non-hazardous approach on 2020-01-03.
pub fn create_test_catalog() -> NeoCatalog {
    let mut catalog = NeoCatalog::new();
    register_approach(&mut catalog, "(2019 XS)", "2020-01-01", true, 705_000.0);
    register_approach(&mut catalog, "(2015 RC)", "2020-01-01", false, 4_027_630.0);
    register_approach(&mut catalog, "(2020 AB)", "2020-01-03", false, 1_230_000.0);
    catalog
}

/// Header row of the upstream close-approach CSV schema
pub const TEST_CSV_HEADER: &str = "id,neo_reference_id,name,nasa_jpl_url,absolute_magnitude_h,\
estimated_diameter_min_kilometers,estimated_diameter_max_kilometers,\
is_potentially_hazardous_asteroid,kilometers_per_second,kilometers_per_hour,\
close_approach_date,close_approach_date_full,miss_distance_astronomical,\
miss_distance_lunar,miss_distance_kilometers,miss_distance_miles";

/// Format one CSV data row for the named object
pub fn format_csv_row(name: &str, date: &str, hazardous: &str, miss_distance_km: f64) -> String {
    format!(
        "2021277,2021277,{name},https://ssd.jpl.nasa.gov/sbdb.cgi?sstr=2021277,20.48,\
0.2111,0.4721,{hazardous},15.75,56701.2,{date},{date} 06:18,0.0269,10.46,\
{miss_distance_km},437913.5"
    )
}

/// Write a three-row close-approach CSV fixture into the given directory
pub fn create_test_csv_file(dir: &Path, filename: &str) -> std::io::Result<PathBuf> {
    let file_path = dir.join(filename);

    let content = format!(
        "{}\n{}\n{}\n{}\n",
        TEST_CSV_HEADER,
        format_csv_row("(2019 XS)", "2020-01-01", "True", 705000.1),
        format_csv_row("(2015 RC)", "2020-01-01", "False", 4027630.5),
        format_csv_row("(2020 AB)", "2020-01-03", "False", 1230000.0),
    );

    fs::write(&file_path, content)?;
    Ok(file_path)
}
