//! Total Expense Tool
//!
//! Sums a list of individual trip costs.

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult,
    ToolSchema,
};

use crate::expense;

/// Tool for summing trip costs
pub struct TotalExpenseTool;

#[async_trait]
impl Tool for TotalExpenseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "calculate_total_expense".into(),
            description: "Calculate total expense of the trip from a list of costs.".into(),
            parameters: vec![ParameterSchema::required(
                "costs",
                "array",
                "List of individual costs to add up",
            )],
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let null = serde_json::Value::Null;
        let costs =
            expense::parse_number_list("costs", call.arguments.get("costs").unwrap_or(&null))?;

        let total = expense::total(&costs);

        Ok(ToolResult::success(
            "calculate_total_expense",
            format!("Total expense: {:.2} across {} items", total, costs.len()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn call(costs: serde_json::Value) -> ToolCall {
        ToolCall {
            name: "calculate_total_expense".into(),
            arguments: HashMap::from([("costs".to_string(), costs)]),
            id: None,
        }
    }

    #[tokio::test]
    async fn test_sums_costs() {
        let result = TotalExpenseTool
            .execute(&call(json!([10, 20, 30.5])))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.contains("60.50"));
    }

    #[tokio::test]
    async fn test_scalar_is_rejected() {
        let err = TotalExpenseTool
            .execute(&call(json!(60.5)))
            .await
            .unwrap_err();

        assert!(matches!(err, agent_core::AgentError::ToolValidation(_)));
    }
}
