//! Standard environment field definitions.
//!
//! These are the fields an environment snapshot may carry. The `name` of each
//! definition is the key used on the wire (JSON/TOML), which is why `soil_pH`
//! keeps its mixed case.
//!
//! # Available Fields
//!
//! ## Climate
//! - `FIELD_MEAN_TEMP` - Mean annual air temperature in °C
//! - `FIELD_ANNUAL_RAINFALL` - Annual rainfall in mm / yr
//!
//! ## Soil
//! - `FIELD_SOIL_PH` - Soil pH (H2O)
//! - `FIELD_CLAY` - Clay content in percent
//! - `FIELD_BULK_DENSITY` - Bulk density in g / cm^3
//!
//! ## Terrain
//! - `FIELD_SLOPE` - Slope in percent
//! - `FIELD_ELEVATION` - Elevation in m

/// Static description of a recognised environment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

pub const FIELD_MEAN_TEMP: FieldDefinition = FieldDefinition {
    name: "mean_temp_c",
    unit: "degC",
    description: "Mean annual near-surface air temperature",
};

pub const FIELD_ANNUAL_RAINFALL: FieldDefinition = FieldDefinition {
    name: "annual_rainfall_mm",
    unit: "mm / yr",
    description: "Annual precipitation total",
};

pub const FIELD_SOIL_PH: FieldDefinition = FieldDefinition {
    name: "soil_pH",
    unit: "1",
    description: "Topsoil pH measured in water",
};

pub const FIELD_CLAY: FieldDefinition = FieldDefinition {
    name: "clay_pct",
    unit: "%",
    description: "Topsoil clay content",
};

pub const FIELD_BULK_DENSITY: FieldDefinition = FieldDefinition {
    name: "bulk_density",
    unit: "g / cm^3",
    description: "Topsoil bulk density, already converted from source units",
};

pub const FIELD_SLOPE: FieldDefinition = FieldDefinition {
    name: "slope_percent",
    unit: "%",
    description: "Terrain slope of the plot",
};

pub const FIELD_ELEVATION: FieldDefinition = FieldDefinition {
    name: "elevation_m",
    unit: "m",
    description: "Elevation above sea level",
};

/// All recognised environment fields, in snapshot order.
pub const ENVIRONMENT_FIELDS: [FieldDefinition; 7] = [
    FIELD_MEAN_TEMP,
    FIELD_ANNUAL_RAINFALL,
    FIELD_SOIL_PH,
    FIELD_CLAY,
    FIELD_BULK_DENSITY,
    FIELD_SLOPE,
    FIELD_ELEVATION,
];

/// Look up a field definition by its wire name.
pub fn field_by_name(name: &str) -> Option<&'static FieldDefinition> {
    ENVIRONMENT_FIELDS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        assert_eq!(field_by_name("soil_pH"), Some(&FIELD_SOIL_PH));
        assert_eq!(field_by_name("soil_ph"), None);
        assert_eq!(field_by_name("elevation_m").map(|f| f.unit), Some("m"));
    }

    #[test]
    fn test_field_names_are_unique() {
        for (i, a) in ENVIRONMENT_FIELDS.iter().enumerate() {
            for b in ENVIRONMENT_FIELDS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
