use anyhow::Result;
use posts_graphql::graphql::export_sdl;

pub fn handle_print_schema() -> Result<()> {
    print!("{}", export_sdl());
    Ok(())
}
