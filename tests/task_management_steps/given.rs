//! Given steps for task management BDD scenarios.

use super::world::TaskWorld;
use crate::test_helpers::FAR_FUTURE;
use citrine::task::services::AddTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    world.snapshot_store()
}

#[given(r#"a store containing a task titled "{title}""#)]
fn store_with_task(world: &mut TaskWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .service
        .add(AddTaskRequest::new(
            title,
            "Seeded by the scenario",
            FAR_FUTURE,
        ))
        .wrap_err("seed task for scenario")?;
    world.current_task = Some(task);
    world.snapshot_store()
}
