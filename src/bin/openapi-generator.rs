//! Print the CloudDesk OpenAPI document to stdout.

use anyhow::Context;
use clouddesk::services::documentation::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi();
    let json = doc.to_pretty_json().context("serializing OpenAPI document")?;
    println!("{json}");
    Ok(())
}
