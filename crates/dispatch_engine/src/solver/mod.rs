pub mod assignment_outcome;
pub mod greedy_scheduler;
pub mod scheduler_params;
