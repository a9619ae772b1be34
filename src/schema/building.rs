use super::{CompiledSchema, Schema};
use once_cell::sync::Lazy;

pub static BUILDING_SCHEMA: Schema = Schema::new(
    "building",
    Lazy::new(|| CompiledSchema::compile("building", include_str!("building.schema.json"))),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use crate::schema::{validate_input, FieldIssue};
    use crate::utils::error::ConvertError;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(&value).unwrap()
    }

    fn tower_a() -> serde_json::Value {
        json!({"project_name": "Tower A", "building_type": "Office", "city": "Shanghai"})
    }

    fn rejected_fields(value: serde_json::Value) -> Vec<String> {
        match validate_input(&BUILDING_SCHEMA, &record(value)) {
            Err(ConvertError::SchemaValidationError { schema, issues }) => {
                assert_eq!(schema, "building");
                let mut fields: Vec<String> = issues.into_iter().map(|i: FieldIssue| i.field).collect();
                fields.sort();
                fields
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_valid_building_input() {
        let mut value = tower_a();
        value["num_floors"] = json!(32);
        value["description"] = json!(null);
        value["extra"] = json!("ignored");

        assert!(validate_input(&BUILDING_SCHEMA, &record(value)).is_ok());
    }

    #[test]
    fn test_missing_field_is_reported_before_type_errors() {
        let err = validate_input(
            &BUILDING_SCHEMA,
            &record(json!({"project_name": 7, "building_type": "Office"})),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::MissingFieldError { ref field } if field == "city"));
    }

    #[test]
    fn test_type_errors_are_enumerated() {
        let fields = rejected_fields(json!({
            "project_name": 7,
            "building_type": "Office",
            "city": "",
            "floor_area": -10.0
        }));

        assert_eq!(fields, vec!["city", "floor_area", "project_name"]);
    }

    #[test]
    fn test_names_must_be_valid_idf_names() {
        for bad in ["Washington, D.C.", "Pudong;East", "Hi!", "   "] {
            let mut value = tower_a();
            value["city"] = json!(bad);
            assert_eq!(rejected_fields(value), vec!["city"], "city {bad:?}");
        }

        let mut value = tower_a();
        value["project_name"] = json!("x".repeat(101));
        assert_eq!(rejected_fields(value), vec!["project_name"]);

        let mut value = tower_a();
        value["project_name"] = json!("x".repeat(100));
        assert!(validate_input(&BUILDING_SCHEMA, &record(value)).is_ok());
    }

    #[test]
    fn test_out_of_range_integers_are_schema_errors() {
        for floors in [json!(5_000_000_000u64), json!(u64::MAX), json!(0)] {
            let mut value = tower_a();
            value["num_floors"] = floors;
            assert_eq!(rejected_fields(value), vec!["num_floors"]);
        }
    }
}
