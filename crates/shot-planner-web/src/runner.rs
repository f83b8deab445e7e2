use shot_planner::{PlanRecord, PlannerError, Rng, ShotPlan, ShotPlanner, TableSnapshot};

/// Planner state behind the wasm exports.
///
/// One runner per AI opponent: the planner, its random stream, and the
/// last plan in flat form for SharedArrayBuffer reads.
pub struct PlannerRunner {
    planner: ShotPlanner,
    rng: Rng,
    last_plan: Option<ShotPlan>,
    record: PlanRecord,
}

impl PlannerRunner {
    pub fn new(planner: ShotPlanner, seed: u64) -> Self {
        Self {
            planner,
            rng: Rng::new(seed),
            last_plan: None,
            record: PlanRecord::default(),
        }
    }

    /// Swap the planner (difficulty or radius change). The random stream continues.
    pub fn set_planner(&mut self, planner: ShotPlanner) {
        self.planner = planner;
    }

    /// Plan a shot and keep it as the current record.
    pub fn plan(&mut self, table: &TableSnapshot) -> ShotPlan {
        let plan = self.planner.calculate_shot(table, &mut self.rng);
        self.record = PlanRecord::from(&plan);
        self.last_plan = Some(plan);
        plan
    }

    /// Parse a client snapshot, plan, and return the plan as JSON.
    pub fn plan_json(&mut self, snapshot_json: &str) -> Result<String, PlannerError> {
        let table = TableSnapshot::from_json(snapshot_json)?;
        let plan = self.plan(&table);
        Ok(serde_json::to_string(&plan)?)
    }

    pub fn thinking_time_ms(&mut self) -> u32 {
        self.planner.thinking_time_ms(&mut self.rng)
    }

    pub fn last_plan(&self) -> Option<&ShotPlan> {
        self.last_plan.as_ref()
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn plan_ptr(&self) -> *const f32 {
        self.record.as_floats().as_ptr()
    }

    pub fn plan_len(&self) -> u32 {
        PlanRecord::FLOATS as u32
    }
}
