//! Hotel Cost Tool
//!
//! Multiplies nightly price by trip length.

use async_trait::async_trait;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult,
    ToolSchema,
};

use crate::expense;

/// Tool for estimating total hotel cost
pub struct HotelCostTool;

#[async_trait]
impl Tool for HotelCostTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "estimate_total_hotel_cost".into(),
            description: "Calculate total hotel cost from the price per night and the number of nights.".into(),
            parameters: vec![
                ParameterSchema::required(
                    "price_per_night",
                    "number",
                    "Hotel price for one night (a plain number or a numeric string)",
                ),
                ParameterSchema::required(
                    "total_days",
                    "number",
                    "Number of nights to stay",
                ),
            ],
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let null = serde_json::Value::Null;
        let args = &call.arguments;
        let price =
            expense::parse_number("price_per_night", args.get("price_per_night").unwrap_or(&null))?;
        let days = expense::parse_number("total_days", args.get("total_days").unwrap_or(&null))?;

        let cost = expense::hotel_cost(price, days);

        Ok(ToolResult::success(
            "estimate_total_hotel_cost",
            format!("Total hotel cost: {:.2} ({:.2} per night x {} nights)", cost, price, days),
        ))
    }
}
