use super::base::BaseConverter;
use crate::domain::model::{ConversionState, Record};
use crate::domain::ports::Converter;
use crate::idf::objects::{CLASS_BUILDING, CLASS_SITE_LOCATION};
use crate::idf::{Building, SharedDocument, SiteLocation, Terrain};
use crate::schema::{validate_input, BUILDING_SCHEMA};
use crate::utils::error::{ConvertError, Result};

/// Used by [`BuildingConverter::add_to_idf`] when the record has no
/// `project_name`. Records going through `convert()` always have one.
pub const DEFAULT_BUILDING_NAME: &str = "Default Building";

/// Used by [`BuildingConverter::add_to_idf`] when the record has no `city`.
pub const DEFAULT_CITY: &str = "DefaultCity";

/// Fixed site coordinates written for every city.
///
/// Known limitation: there is no geocoding, so the location name and the
/// coordinates below are unrelated (these are Beijing's).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderSite {
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: f64,
    pub elevation: f64,
}

pub const PLACEHOLDER_SITE: PlaceholderSite = PlaceholderSite {
    latitude: 39.9,
    longitude: 116.4,
    time_zone: 8.0,
    elevation: 50.0,
};

/// Maps one building record onto a `BUILDING` and a `SITE:LOCATION` object.
///
/// Construction validates and fails fast; `convert()` re-validates and
/// absorbs every failure into the counters.
#[derive(Debug)]
pub struct BuildingConverter {
    base: BaseConverter,
}

impl BuildingConverter {
    pub const NAME: &'static str = "building";

    pub fn new(idf: SharedDocument, data: Record) -> Result<Self> {
        let converter = Self {
            base: BaseConverter::new(Self::NAME, idf, data),
        };
        converter.validate_building_data()?;
        Ok(converter)
    }

    pub fn base(&self) -> &BaseConverter {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseConverter {
        &mut self.base
    }

    pub fn validate_building_data(&self) -> Result<()> {
        let _guard = self.base.logger().enter();
        validate_input(&BUILDING_SCHEMA, self.base.data())
    }

    /// Appends the two objects for `building_data`. Counters are left alone;
    /// `convert()` owns them.
    pub fn add_to_idf(&self, building_data: &Record) -> Result<()> {
        let _guard = self.base.logger().enter();
        tracing::info!("🏗️ Adding Building and Location objects to IDF...");

        let name = building_data
            .get_str("project_name")
            .unwrap_or(DEFAULT_BUILDING_NAME);
        let city = building_data.get_str("city").unwrap_or(DEFAULT_CITY);

        // 兩個物件都建好後才寫入，避免只留下其中一個
        let building = Building::builder(name)
            .north_axis(0.0)
            .terrain(Terrain::City)
            .build()?;
        let location = SiteLocation::builder(city)
            .latitude(PLACEHOLDER_SITE.latitude)
            .longitude(PLACEHOLDER_SITE.longitude)
            .time_zone(PLACEHOLDER_SITE.time_zone)
            .elevation(PLACEHOLDER_SITE.elevation)
            .build()?;

        let mut idf = self.base.idf().try_borrow_mut().map_err(|e| {
            ConvertError::construction(CLASS_BUILDING, format!("IDF document is busy: {}", e))
        })?;

        let added = idf.add(building);
        tracing::info!("✅ Building '{}' added", added.name().unwrap_or_default());
        let added = idf.add(location);
        tracing::info!("✅ Site:Location '{}' added", added.name().unwrap_or_default());
        tracing::debug!(
            "{} / {} objects now in document",
            idf.count(CLASS_BUILDING),
            idf.count(CLASS_SITE_LOCATION)
        );

        Ok(())
    }
}

impl Converter for BuildingConverter {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn convert(&mut self) -> ConversionState {
        let span = self.base.logger().clone();
        let _guard = span.enter();
        tracing::info!("🔄 Starting building data conversion...");

        if self.base.data().is_empty() {
            tracing::warn!("⚠️ No building data input found");
            return self.base.record(ConversionState::one_failure());
        }

        if let Err(e) = self.validate_building_data() {
            tracing::error!("❌ Building data conversion aborted: {}", e);
            return self.base.record(ConversionState::one_failure());
        }

        match self.add_to_idf(self.base.data()) {
            Ok(()) => {
                tracing::info!("✅ Building data conversion completed");
                self.base.record(ConversionState::one_success())
            }
            Err(e) => {
                tracing::error!(error = ?e, "❌ Building data conversion failed: {}", e);
                self.base.record(ConversionState::one_failure())
            }
        }
    }

    fn state(&self) -> ConversionState {
        self.base.state()
    }
}
