//! Daily Budget Tool
//!
//! Divides total trip cost by trip length. Zero days is an argument
//! error, never a raw division fault.

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult,
    ToolSchema,
};

use crate::expense;

/// Tool for computing a per-day expense budget
pub struct DailyBudgetTool;

#[async_trait]
impl Tool for DailyBudgetTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "calculate_daily_expense_budget".into(),
            description: "Calculate the daily expense budget from the total cost and the number of days.".into(),
            parameters: vec![
                ParameterSchema::required(
                    "total_cost",
                    "number",
                    "Total trip cost",
                ),
                ParameterSchema::required(
                    "days",
                    "integer",
                    "Number of days in the trip (must be positive)",
                ),
            ],
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let null = serde_json::Value::Null;
        let args = &call.arguments;
        let total_cost = expense::parse_number("total_cost", args.get("total_cost").unwrap_or(&null))?;
        let days = expense::parse_number("days", args.get("days").unwrap_or(&null))?;

        let budget = expense::daily_budget(total_cost, days)?;

        Ok(ToolResult::success(
            "calculate_daily_expense_budget",
            format!("Daily budget: {:.2} for {} days", budget, days),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn call(total_cost: serde_json::Value, days: serde_json::Value) -> ToolCall {
        ToolCall {
            name: "calculate_daily_expense_budget".into(),
            arguments: HashMap::from([
                ("total_cost".to_string(), total_cost),
                ("days".to_string(), days),
            ]),
            id: None,
        }
    }

    #[tokio::test]
    async fn test_daily_budget() {
        let result = DailyBudgetTool
            .execute(&call(json!(300), json!(3)))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.output.contains("100.00"));
    }

    #[tokio::test]
    async fn test_zero_days_rejected() {
        let err = DailyBudgetTool
            .execute(&call(json!(300), json!(0)))
            .await
            .unwrap_err();

        assert!(matches!(err, agent_core::AgentError::ToolValidation(_)));
    }
}
