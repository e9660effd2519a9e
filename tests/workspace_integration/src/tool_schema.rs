//! Tool schema validity tests.
//!
//! Every registered tool must carry a name, a description, and an input
//! schema of type "object" listing its required parameters.

use serde_json::Value;

/// Validates that a JSON schema has the required structure.
fn validate_json_schema(schema: &Value) -> Result<(), String> {
    let obj = schema
        .as_object()
        .ok_or_else(|| "Schema must be an object".to_string())?;

    if let Some(type_val) = obj.get("type") {
        if type_val != "object" {
            return Err(format!("Expected type 'object', got {:?}", type_val));
        }
    }

    if let Some(properties) = obj.get("properties") {
        if !properties.is_object() {
            return Err("Properties must be an object".to_string());
        }
    }

    Ok(())
}

/// Validates that a tool has required fields.
fn validate_tool(tool: &rmcp::model::Tool) -> Result<(), String> {
    if tool.name.is_empty() {
        return Err("Tool name cannot be empty".to_string());
    }

    if tool.description.as_deref().is_none_or(str::is_empty) {
        return Err(format!("Tool '{}' must have a description", tool.name));
    }

    if tool.input_schema.is_empty() {
        return Err(format!("Tool '{}' must have an input schema", tool.name));
    }

    let schema_value = serde_json::to_value(&*tool.input_schema)
        .map_err(|e| format!("Failed to serialize schema: {}", e))?;
    validate_json_schema(&schema_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_draw::DrawServer;
    use mcp_draw::GenerateImageParams;
    use schemars::schema_for;
    use std::borrow::Cow;
    use std::sync::Arc;

    #[test]
    fn test_json_schema_validation() {
        let valid_schema = serde_json::json!({
            "type": "object",
            "properties": {
                "description": { "type": "string" }
            },
            "required": ["description"]
        });
        assert!(validate_json_schema(&valid_schema).is_ok());

        let invalid_schema = serde_json::json!({ "type": "string" });
        assert!(validate_json_schema(&invalid_schema).is_err());
    }

    #[test]
    fn test_tool_validation_rejects_missing_description() {
        let tool = rmcp::model::Tool {
            name: Cow::Borrowed("generate_image_from_description"),
            description: None,
            input_schema: Arc::new(serde_json::Map::new()),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        };
        assert!(validate_tool(&tool).is_err());
    }

    #[test]
    fn test_registered_tool_is_valid() {
        let tool = DrawServer::tool();
        assert!(validate_tool(&tool).is_ok(), "{:?}", validate_tool(&tool));
        assert_eq!(tool.name, "generate_image_from_description");
    }

    #[test]
    fn test_generate_params_schema_validity() {
        let schema_value = serde_json::to_value(schema_for!(GenerateImageParams)).unwrap();
        assert!(validate_json_schema(&schema_value).is_ok());

        let obj = schema_value.as_object().unwrap();
        assert_eq!(obj.get("type").and_then(|v| v.as_str()), Some("object"));

        let properties = obj.get("properties").unwrap().as_object().unwrap();
        assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["description"]);

        let required: Vec<&str> = obj
            .get("required")
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["description"]);
    }
}

#[cfg(test)]
mod property_tests {
    use mcp_draw::GenerateImageParams;
    use proptest::prelude::*;

    proptest! {
        /// Any string is accepted as a description by the tool's argument parser.
        #[test]
        fn any_description_deserializes(description in any::<String>()) {
            let args = serde_json::json!({ "description": description.clone() });
            let params: GenerateImageParams = serde_json::from_value(args).unwrap();
            prop_assert_eq!(params.description, description);
        }

        /// Arguments whose description is not a string are rejected.
        #[test]
        fn non_string_description_is_rejected(n in any::<i64>()) {
            let args = serde_json::json!({ "description": n });
            prop_assert!(serde_json::from_value::<GenerateImageParams>(args).is_err());
        }
    }
}
