use schemars::schema_for;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonAirportNetwork))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_describes_network() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

        assert_eq!(value["title"], "AirportNetwork");
        assert!(value["properties"]["airports"].is_object());
        assert!(value["required"]
            .as_array()
            .unwrap()
            .contains(&serde_json::Value::from("airports")));
    }
}
