use std::{fs::File, io::Read, path::Path};

use anyhow::Context;
use courier_routing::city::City;
use tracing::{debug, info};

/// Reads `name,latitude,longitude` rows after a header line. Extra columns are ignored and rows
/// with fewer than three fields are skipped.
pub fn read_cities<R: Read>(reader: R) -> anyhow::Result<Vec<City>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cities = vec![];
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());

        let (Some(name), Some(lat), Some(lng)) = (record.get(0), record.get(1), record.get(2))
        else {
            debug!(line, "Skipping short city row");
            continue;
        };

        let lat: f64 = lat
            .parse()
            .with_context(|| format!("line {line}: invalid latitude {lat:?} for {name}"))?;
        let lng: f64 = lng
            .parse()
            .with_context(|| format!("line {line}: invalid longitude {lng:?} for {name}"))?;

        cities.push(City::new(name, lat, lng));
    }

    Ok(cities)
}

pub fn read_cities_file(path: &Path) -> anyhow::Result<Vec<City>> {
    let file =
        File::open(path).with_context(|| format!("failed to open city file {}", path.display()))?;
    let cities =
        read_cities(file).with_context(|| format!("failed to read city file {}", path.display()))?;

    info!(cities = cities.len(), path = %path.display(), "Loaded cities");

    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cities() {
        let data = "\
City,Latitude,Longitude
Delhi, 28.6139 , 77.2090
 Mumbai ,19.0760,72.8777
";
        let cities = read_cities(data.as_bytes()).unwrap();

        assert_eq!(
            cities,
            vec![
                City::new("Delhi", 28.6139, 77.2090),
                City::new("Mumbai", 19.0760, 72.8777),
            ]
        );
    }

    #[test]
    fn test_extra_columns_and_short_rows() {
        let data = "\
name,lat,lng,state
Pune,18.5204,73.8567,Maharashtra
Nowhere,12.0
Jaipur,26.9124,75.7873
";
        let cities = read_cities(data.as_bytes()).unwrap();

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name(), "Pune");
        assert_eq!(cities[1].name(), "Jaipur");
    }

    #[test]
    fn test_header_only() {
        let cities = read_cities("name,lat,lng\n".as_bytes()).unwrap();
        assert!(cities.is_empty());
    }

    #[test]
    fn test_invalid_coordinate() {
        let data = "name,lat,lng\nDelhi,north,77.2\n";
        let error = read_cities(data.as_bytes()).unwrap_err();

        assert!(error.to_string().contains("invalid latitude"));
    }
}
