use super::{CompiledSchema, Schema};
use once_cell::sync::Lazy;

pub static ZONE_SCHEMA: Schema = Schema::new(
    "zone",
    Lazy::new(|| CompiledSchema::compile("zone", include_str!("zone.schema.json"))),
);
