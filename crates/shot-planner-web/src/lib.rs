//! WASM bridge: the browser client hands over a table snapshot as JSON and
//! gets the AI's shot back, either as JSON or as a flat `f32` record read
//! straight out of wasm memory.

pub mod runner;

pub use runner::PlannerRunner;

use std::cell::RefCell;

use shot_planner::{Difficulty, PlannerConfig, ShotPlanner};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PlannerRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner, creating a default (Medium) one on first use.
fn with_runner<R>(f: impl FnOnce(&mut PlannerRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(|| PlannerRunner::new(ShotPlanner::default(), 1));
        f(runner)
    })
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Set up logging and the planner for one AI opponent.
#[wasm_bindgen]
pub fn planner_init(difficulty: &str, seed: u32) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let difficulty: Difficulty = difficulty.parse().map_err(to_js)?;
    let runner = PlannerRunner::new(ShotPlanner::new(difficulty), u64::from(seed));
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("shot-planner: initialized ({})", difficulty);
    Ok(())
}

/// Replace the planner with a custom config (ball radius, tuned profile).
#[wasm_bindgen]
pub fn planner_configure(config_json: &str) -> Result<(), JsValue> {
    let config = PlannerConfig::from_json(config_json).map_err(to_js)?;
    let planner = ShotPlanner::from_config(config).map_err(to_js)?;
    with_runner(|r| r.set_planner(planner));
    log::info!("shot-planner: configured (ball radius {})", config.ball_radius);
    Ok(())
}

/// Plan the AI's shot for a snapshot. Returns the plan as JSON.
#[wasm_bindgen]
pub fn planner_calculate_shot(snapshot_json: &str) -> Result<String, JsValue> {
    with_runner(|r| r.plan_json(snapshot_json)).map_err(to_js)
}

/// Advisory delay before the client shows the shot.
#[wasm_bindgen]
pub fn planner_thinking_time_ms() -> u32 {
    with_runner(|r| r.thinking_time_ms())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_plan_ptr() -> *const f32 {
    with_runner(|r| r.plan_ptr())
}

#[wasm_bindgen]
pub fn get_plan_len() -> u32 {
    with_runner(|r| r.plan_len())
}
