use crate::problem::minutes::Minutes;

/// Twelve hours of delivery work per driver and run.
pub const WORK_TIME_CEILING: Minutes = Minutes::from_hours(12);

#[derive(Clone, Debug)]
pub struct SchedulerParams {
    /// Inclusive upper bound on the minutes committed to any single driver.
    pub work_time_ceiling: Minutes,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            work_time_ceiling: WORK_TIME_CEILING,
        }
    }
}
