mod generate_content;
mod schema;

pub use generate_content::*;
pub use schema::*;
