mod schema;
mod serve;

pub use schema::handle_print_schema;
pub use serve::handle_serve;
