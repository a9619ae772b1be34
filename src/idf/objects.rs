use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// EnergyPlus 名稱欄位的長度上限
pub const MAX_NAME_LENGTH: usize = 100;

pub const CLASS_VERSION: &str = "VERSION";
pub const CLASS_BUILDING: &str = "BUILDING";
pub const CLASS_SITE_LOCATION: &str = "SITE:LOCATION";

/// A single attribute value of an IDF object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Country,
    Suburbs,
    City,
    Ocean,
    Urban,
}

impl Terrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Country => "Country",
            Terrain::Suburbs => "Suburbs",
            Terrain::City => "City",
            Terrain::Ocean => "Ocean",
            Terrain::Urban => "Urban",
        }
    }
}

fn validate_name(class: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ConvertError::construction(class, "Name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ConvertError::construction(
            class,
            format!("Name exceeds {} characters", MAX_NAME_LENGTH),
        ));
    }
    if let Some(c) = name.chars().find(|c| matches!(*c, ',' | ';' | '!')) {
        return Err(ConvertError::construction(
            class,
            format!("Name '{}' contains reserved character '{}'", name, c),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub north_axis: f64,
    pub terrain: Terrain,
}

impl Building {
    pub fn builder(name: impl Into<String>) -> BuildingBuilder {
        BuildingBuilder {
            name: name.into(),
            north_axis: 0.0,
            terrain: Terrain::Suburbs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildingBuilder {
    name: String,
    north_axis: f64,
    terrain: Terrain,
}

impl BuildingBuilder {
    pub fn north_axis(mut self, degrees: f64) -> Self {
        self.north_axis = degrees;
        self
    }

    pub fn terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn build(self) -> Result<Building> {
        validate_name(CLASS_BUILDING, &self.name)?;
        if !self.north_axis.is_finite() {
            return Err(ConvertError::construction(
                CLASS_BUILDING,
                "North Axis must be a finite number",
            ));
        }
        Ok(Building {
            name: self.name,
            north_axis: self.north_axis,
            terrain: self.terrain,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: f64,
    pub elevation: f64,
}

impl SiteLocation {
    pub fn builder(name: impl Into<String>) -> SiteLocationBuilder {
        SiteLocationBuilder {
            name: name.into(),
            latitude: 0.0,
            longitude: 0.0,
            time_zone: 0.0,
            elevation: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteLocationBuilder {
    name: String,
    latitude: f64,
    longitude: f64,
    time_zone: f64,
    elevation: f64,
}

impl SiteLocationBuilder {
    pub fn latitude(mut self, degrees: f64) -> Self {
        self.latitude = degrees;
        self
    }

    pub fn longitude(mut self, degrees: f64) -> Self {
        self.longitude = degrees;
        self
    }

    pub fn time_zone(mut self, hours: f64) -> Self {
        self.time_zone = hours;
        self
    }

    pub fn elevation(mut self, meters: f64) -> Self {
        self.elevation = meters;
        self
    }

    pub fn build(self) -> Result<SiteLocation> {
        validate_name(CLASS_SITE_LOCATION, &self.name)?;

        // EnergyPlus 的合法範圍
        let bounds = [
            ("Latitude", self.latitude, -90.0, 90.0),
            ("Longitude", self.longitude, -180.0, 180.0),
            ("Time Zone", self.time_zone, -12.0, 14.0),
            ("Elevation", self.elevation, -300.0, 8900.0),
        ];
        for (label, value, min, max) in bounds {
            if !(min..=max).contains(&value) {
                return Err(ConvertError::construction(
                    CLASS_SITE_LOCATION,
                    format!("{} {} is outside [{}, {}]", label, value, min, max),
                ));
            }
        }

        Ok(SiteLocation {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            time_zone: self.time_zone,
            elevation: self.elevation,
        })
    }
}

/// Tagged variant per supported IDF class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum IdfObject {
    Version(Version),
    Building(Building),
    SiteLocation(SiteLocation),
}

impl IdfObject {
    pub fn class_name(&self) -> &'static str {
        match self {
            IdfObject::Version(_) => CLASS_VERSION,
            IdfObject::Building(_) => CLASS_BUILDING,
            IdfObject::SiteLocation(_) => CLASS_SITE_LOCATION,
        }
    }

    /// 寫出 IDF 時使用的類別名稱
    pub fn display_class(&self) -> &'static str {
        match self {
            IdfObject::Version(_) => "Version",
            IdfObject::Building(_) => "Building",
            IdfObject::SiteLocation(_) => "Site:Location",
        }
    }

    /// `(attribute, label, value)` in IDF field order.
    pub fn fields(&self) -> Vec<(&'static str, &'static str, FieldValue)> {
        match self {
            IdfObject::Version(v) => vec![(
                "Version_Identifier",
                "Version Identifier",
                v.identifier.as_str().into(),
            )],
            IdfObject::Building(b) => vec![
                ("Name", "Name", b.name.as_str().into()),
                ("North_Axis", "North Axis {deg}", b.north_axis.into()),
                ("Terrain", "Terrain", b.terrain.as_str().into()),
            ],
            IdfObject::SiteLocation(s) => vec![
                ("Name", "Name", s.name.as_str().into()),
                ("Latitude", "Latitude {deg}", s.latitude.into()),
                ("Longitude", "Longitude {deg}", s.longitude.into()),
                ("Time_Zone", "Time Zone {hr}", s.time_zone.into()),
                ("Elevation", "Elevation {m}", s.elevation.into()),
            ],
        }
    }

    pub fn field(&self, attribute: &str) -> Option<FieldValue> {
        self.fields()
            .into_iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(attribute))
            .map(|(_, _, value)| value)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            IdfObject::Version(_) => None,
            IdfObject::Building(b) => Some(&b.name),
            IdfObject::SiteLocation(s) => Some(&s.name),
        }
    }
}

impl From<Version> for IdfObject {
    fn from(value: Version) -> Self {
        IdfObject::Version(value)
    }
}

impl From<Building> for IdfObject {
    fn from(value: Building) -> Self {
        IdfObject::Building(value)
    }
}

impl From<SiteLocation> for IdfObject {
    fn from(value: SiteLocation) -> Self {
        IdfObject::SiteLocation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_builder() {
        let building = Building::builder("Tower A")
            .north_axis(0.0)
            .terrain(Terrain::City)
            .build()
            .unwrap();

        let object = IdfObject::from(building);
        assert_eq!(object.class_name(), "BUILDING");
        assert_eq!(object.field("Name"), Some(FieldValue::Text("Tower A".into())));
        assert_eq!(object.field("north_axis"), Some(FieldValue::Number(0.0)));
        assert_eq!(object.field("Terrain"), Some(FieldValue::Text("City".into())));
        assert_eq!(object.field("Latitude"), None);
    }

    #[test]
    fn test_names_with_separators_are_rejected() {
        for bad in ["", "   ", "Tower, A", "Tower;A", "Tower!A"] {
            let err = Building::builder(bad).build().unwrap_err();
            assert!(matches!(
                err,
                ConvertError::ObjectConstructionError { class: "BUILDING", .. }
            ));
        }

        let long_name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(SiteLocation::builder(long_name).build().is_err());
    }

    #[test]
    fn test_site_location_bounds() {
        assert!(SiteLocation::builder("Shanghai")
            .latitude(31.2)
            .longitude(121.5)
            .time_zone(8.0)
            .elevation(4.0)
            .build()
            .is_ok());

        let err = SiteLocation::builder("Nowhere")
            .latitude(120.0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Latitude 120 is outside"));
    }

    #[test]
    fn test_number_display_is_compact() {
        assert_eq!(FieldValue::Number(8.0).to_string(), "8");
        assert_eq!(FieldValue::Number(39.9).to_string(), "39.9");
    }
}
