use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Wall-clock durations of the steps of one pipeline run, in execution order.
///
/// Repeated step names (e.g. two `blur` passes) are summed in the lookup map
/// but kept separate in `steps()`.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    /// Records the result of a stopped [`Timer`].
    pub fn record(&mut self, (name, duration): (String, Duration)) {
        self.add_step(name, duration);
    }

    /// Appends all steps of `other` after the steps already recorded.
    pub fn extend(&mut self, other: PipelineTimings) {
        for step in other.steps {
            self.add_step(step.name, step.duration);
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            info!(
                "{:<20} {:>12.3}ms ({:>5.1}%)",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        info!("{:<20} {:>12.3}ms", "total", total.as_secs_f64() * 1000.0);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_steps_are_summed() {
        let mut timings = PipelineTimings::new();
        timings.add_step("blur", Duration::from_millis(3));
        timings.add_step("negate", Duration::from_millis(1));
        timings.add_step("blur", Duration::from_millis(2));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("blur"), Some(Duration::from_millis(5)));
        assert_eq!(timings.get_step("mirror"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(6));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut first = PipelineTimings::new();
        first.add_step("decode", Duration::from_millis(1));
        let mut second = PipelineTimings::new();
        second.record(("negate".to_string(), Duration::from_millis(2)));

        first.extend(second);

        let names: Vec<_> = first.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["decode", "negate"]);
    }
}
