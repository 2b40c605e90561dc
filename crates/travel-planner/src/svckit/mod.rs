//! Travel Tools
//!
//! The three expense tools exposed to the agent, one per file.

mod daily_budget;
mod hotel_cost;
mod total_expense;

pub use daily_budget::DailyBudgetTool;
pub use hotel_cost::HotelCostTool;
pub use total_expense::TotalExpenseTool;
