use serde_json::json;

use crate::common::SessionHandle;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let handle = SessionHandle::open()?;
    let engine = handle.session.engine();

    let report = json!({
        "snapshot": engine.snapshot(),
        "progress": engine.progress(),
        "sync": handle.session.status(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
