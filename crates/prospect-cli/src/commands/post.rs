use prospect_core::PostCategory;
use serde_json::json;

use crate::common::SessionHandle;

pub fn publish(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category: PostCategory = category.parse()?;

    let mut handle = SessionHandle::open()?;
    match handle.session.perform_linkedin_post(category) {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => print_unavailable(category)?,
    }
    handle.finish();
    Ok(())
}

pub fn skip(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category: PostCategory = category.parse()?;

    let mut handle = SessionHandle::open()?;
    match handle.session.skip_linkedin_post(category) {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => print_unavailable(category)?,
    }
    handle.finish();
    Ok(())
}

/// Already posted or skipped this cycle: a no-op, not an error.
fn print_unavailable(category: PostCategory) -> Result<(), Box<dyn std::error::Error>> {
    let notice = json!({
        "type": "Unavailable",
        "category": category,
        "message": format!("'{category}' was already posted or skipped this cycle"),
    });
    println!("{}", serde_json::to_string_pretty(&notice)?);
    Ok(())
}
