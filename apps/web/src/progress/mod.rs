// Progress: the simulated analysis flow shown between form submission and the
// upstream results page. The simulator owns WHAT each tick displays; the
// pipeline owns the two timers (1500 ms steps, 6000 ms real submission).

pub mod handlers;
pub mod jobs;
pub mod pipeline;
pub mod simulator;
pub mod view;
