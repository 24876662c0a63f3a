use anyhow::Result;

pub fn version_string() -> String {
    format!("omnifetch version {}", env!("CARGO_PKG_VERSION"))
}

pub fn execute() -> Result<()> {
    println!("{}", version_string());
    Ok(())
}
