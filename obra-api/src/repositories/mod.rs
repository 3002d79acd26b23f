mod seed;
mod site_store;

pub use seed::demo_data;
pub use site_store::*;
