use prospect_core::ActionCategory;

use crate::common::SessionHandle;

pub fn run(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category: ActionCategory = category.parse()?;

    let mut handle = SessionHandle::open()?;
    let event = handle.session.perform_action(category);
    println!("{}", serde_json::to_string_pretty(&event)?);
    handle.finish();
    Ok(())
}
