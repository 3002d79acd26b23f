mod cost_curve;
mod daily_log;
mod expense;
mod ids;
mod material;
mod project;
mod report;
mod supplier;
mod team;

pub use cost_curve::*;
pub use daily_log::*;
pub use expense::*;
pub use ids::*;
pub use material::*;
pub use project::*;
pub use report::*;
pub use supplier::*;
pub use team::*;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");
