use docscope_core::bundle::FactBundle;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Fact bundle JSON schema:");
    println!("========================");
    let schema = schemars::schema_for!(FactBundle);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
