use anyhow::Result;
use std::path::Path;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = blog_admin::presentation::http::openapi::snapshot_path_from_env();
    blog_admin::presentation::http::openapi::write_openapi_snapshot(Path::new(&output_path))?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
