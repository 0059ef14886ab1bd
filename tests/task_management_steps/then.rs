//! Then steps for task management BDD scenarios.

use super::world::TaskWorld;
use citrine::{cli::render_table, task::services::ErrorKind};
use rstest_bdd_macros::then;

#[then(r#"the task is added with status "{status}""#)]
fn task_added_with_status(world: &TaskWorld, status: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing result in scenario world"))?;
    let task = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task failure: {err}"))?;

    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected {status} status, found {}",
            task.status()
        ));
    }
    if task.created_at() != task.updated_at() {
        return Err(eyre::eyre!(
            "expected created_at and updated_at timestamps to match at creation"
        ));
    }
    Ok(())
}

#[then("the command fails with a validation error")]
fn fails_with_validation_error(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing result in scenario world"))?;

    match result {
        Err(err) if err.kind() == ErrorKind::Validation => Ok(()),
        other => Err(eyre::eyre!("expected validation error, got {other:?}")),
    }
}

#[then("the store file is unchanged")]
fn store_file_unchanged(world: &TaskWorld) -> Result<(), eyre::Report> {
    let before = world
        .store_snapshot
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing store snapshot in scenario world"))?;
    let after = world.store_dir.read_raw()?;

    if &after != before {
        return Err(eyre::eyre!(
            "store file changed:\nbefore: {before:?}\nafter: {after:?}"
        ));
    }
    Ok(())
}

#[then("the task list has {count:usize} rows")]
fn task_list_has_rows(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world
        .service
        .list()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    let rendered = render_table(&tasks);
    let rows = rendered.lines().count().saturating_sub(2);

    if tasks.len() != count || rows != count {
        return Err(eyre::eyre!(
            "expected {count} rows, found {rows} rendered and {} stored",
            tasks.len()
        ));
    }
    Ok(())
}
