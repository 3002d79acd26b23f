pub mod abc;
pub mod budget;
pub mod kpi;
