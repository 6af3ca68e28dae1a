use super::ports::SceneSink;
use super::random::seeded_source;
use super::sampler::SceneSampler;
use super::types::Scene;
use crate::common::{DomainError, DomainResult};
use crate::domains::logger::DynLogger;

pub const DEFAULT_SCENE_COUNT: usize = 20;
pub const DEFAULT_SEED: u64 = 1234;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub scenes_written: usize,
    pub obstacles_written: usize,
}

/// Generates a fixed number of scenes from one seeded stream and hands
/// each to a `SceneSink`, in order.
pub struct BatchDriver {
    count: usize,
    seed: u64,
    sampler: SceneSampler,
    logger: DynLogger,
}

impl BatchDriver {
    pub fn new(count: usize, seed: u64, logger: DynLogger) -> Self {
        Self { count, seed, sampler: SceneSampler::default(), logger }
    }

    pub fn with_sampler(mut self, sampler: SceneSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Zero-padded scene index, at least two digits.
    pub fn identifier(index: usize) -> String {
        format!("{:02}", index)
    }

    /// Runs the batch. The first sink failure aborts the run.
    pub fn run(&self, sink: &mut dyn SceneSink) -> DomainResult<BatchSummary> {
        let mut rng = seeded_source(self.seed);
        let mut summary = BatchSummary::default();

        self.logger.info(&format!("Generating {} scenes with seed {}", self.count, self.seed));

        for index in 0..self.count {
            let identifier = Self::identifier(index);
            let scene = self.sampler.sample(&mut rng);

            if !scene.obstacles_within(self.sampler.params().safety_margin, 1e-6) {
                self.logger.warn(&format!(
                    "Scene {} has an obstacle inside the safety margin",
                    identifier
                ));
            }

            if let Err(e) = sink.write_scene(&identifier, &scene) {
                self.logger.error(&format!("Failed to write scene {}: {}", identifier, e));
                return Err(match e {
                    sink_err @ DomainError::Sink { .. } => sink_err,
                    other => DomainError::Sink { identifier, reason: other.to_string() },
                });
            }

            self.logger.info(&format!(
                "Scene {}: {}x{}, {} obstacles",
                identifier,
                scene.width,
                scene.height,
                scene.obstacles.len()
            ));
            summary.scenes_written += 1;
            summary.obstacles_written += scene.obstacles.len();
        }

        self.logger.info(&format!(
            "Batch complete: {} scenes, {} obstacles",
            summary.scenes_written, summary.obstacles_written
        ));
        Ok(summary)
    }

    /// The scene sequence `run` would hand to a sink.
    pub fn scenes(&self) -> Vec<(String, Scene)> {
        let mut rng = seeded_source(self.seed);
        (0..self.count)
            .map(|index| (Self::identifier(index), self.sampler.sample(&mut rng)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::init_noop_logger;

    #[test]
    fn identifiers_are_zero_padded() {
        assert_eq!(BatchDriver::identifier(0), "00");
        assert_eq!(BatchDriver::identifier(7), "07");
        assert_eq!(BatchDriver::identifier(19), "19");
        assert_eq!(BatchDriver::identifier(120), "120");
    }

    #[test]
    fn run_matches_scenes() {
        let driver = BatchDriver::new(DEFAULT_SCENE_COUNT, DEFAULT_SEED, init_noop_logger());
        let mut collected: Vec<(String, Scene)> = Vec::new();
        let summary = driver.run(&mut collected).unwrap();

        assert_eq!(summary.scenes_written, DEFAULT_SCENE_COUNT);
        let obstacles: usize = collected.iter().map(|(_, s)| s.obstacles.len()).sum();
        assert_eq!(summary.obstacles_written, obstacles);
        assert_eq!(collected, driver.scenes());
    }

    #[test]
    fn zero_count_writes_nothing() {
        let driver = BatchDriver::new(0, DEFAULT_SEED, init_noop_logger());
        let mut collected: Vec<(String, Scene)> = Vec::new();
        assert_eq!(driver.run(&mut collected).unwrap(), BatchSummary::default());
        assert!(collected.is_empty());
    }
}
