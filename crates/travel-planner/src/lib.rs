//! # travel-planner
//!
//! Travel expense tools and the agent prompt for the travel-agent system.
//!
//! The tools are deliberately small: the agent does the itinerary
//! reasoning, these just keep its arithmetic honest.
//!
//! - `estimate_total_hotel_cost` - nightly price x nights
//! - `calculate_total_expense` - sum of a cost list
//! - `calculate_daily_expense_budget` - total cost / days

pub mod error;
pub mod expense;
pub mod svckit;

pub use error::{PlannerError, Result};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{DailyBudgetTool, HotelCostTool, TotalExpenseTool};
}

/// System prompt for the travel planner agent
pub const TRAVEL_PLANNER_PROMPT: &str = r#"You are a helpful travel planning assistant.

Given a travel question, produce a practical plan: destinations, a day-by-day
outline where it helps, and a realistic cost picture.

## Budgeting

Never do trip arithmetic in your head. Use the tools:

1. `estimate_total_hotel_cost` for accommodation (price per night x nights)
2. `calculate_total_expense` to sum the individual cost items
3. `calculate_daily_expense_budget` to break a total down per day

Present costs with their assumptions ("assuming ~150/night mid-range hotel")
so the traveler can adjust them.

## Style

- Be concrete: name neighborhoods, typical prices, travel times
- Flag seasonal considerations (weather, crowds, prices)
- If the question is not about travel, answer briefly and say what you are for"#;

/// Register the three travel tools on a registry
pub fn register_tools(registry: &mut agent_core::ToolRegistry) {
    registry.register(tools::HotelCostTool);
    registry.register(tools::TotalExpenseTool);
    registry.register(tools::DailyBudgetTool);
}
