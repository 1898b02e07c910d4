pub mod category;
pub mod fetch_plan;
pub mod forecast;
pub mod keyword_rules;
