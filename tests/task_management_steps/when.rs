//! When steps for task management BDD scenarios.

use super::world::TaskWorld;
use chrono::{TimeDelta, Utc};
use citrine::task::services::{AddTaskRequest, UpdateTaskRequest};
use rstest_bdd_macros::when;

fn due_after(offset: TimeDelta) -> String {
    (Utc::now() + offset).to_rfc3339()
}

fn hours(value: u64) -> Result<TimeDelta, eyre::Report> {
    let whole = i64::try_from(value)?;
    TimeDelta::try_hours(whole).ok_or_else(|| eyre::eyre!("{value} hours is out of range"))
}

#[when(r#"I add a task titled "{title}" due in {count:u64} hours"#)]
fn add_future_task(world: &mut TaskWorld, title: String, count: u64) -> Result<(), eyre::Report> {
    let due = due_after(hours(count)?);
    let result = world
        .service
        .add(AddTaskRequest::new(title, "Added by the scenario", due));
    world.record(result);
    Ok(())
}

#[when(r#"I add a task titled "{title}" due {count:u64} hours ago"#)]
fn add_past_task(world: &mut TaskWorld, title: String, count: u64) -> Result<(), eyre::Report> {
    let due = due_after(-hours(count)?);
    let result = world
        .service
        .add(AddTaskRequest::new(title, "Added by the scenario", due));
    world.record(result);
    Ok(())
}

#[when(r#"I set that task's status to "{status}""#)]
fn set_status(world: &mut TaskWorld, status: String) -> Result<(), eyre::Report> {
    let id = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?
        .id()
        .to_string();
    let result = world
        .service
        .update(UpdateTaskRequest::new(id).with_status(status));
    world.record(result);
    Ok(())
}

#[when("I delete that task")]
fn delete_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))?
        .id()
        .to_string();
    let result = world.service.delete(&id);
    world.last_result = Some(result);
    Ok(())
}
