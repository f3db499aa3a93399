fn main() -> Result<(), Box<dyn std::error::Error>> {
    docmeta::build!("schema/fixtures.toml");

    Ok(())
}
