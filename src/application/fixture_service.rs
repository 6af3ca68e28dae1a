// Fixture Service - wires configuration, sampler, batch driver and SVG sink
use crate::adapters::outbound::SvgFileSink;
use crate::common::ApplicationResult;
use crate::config::Config;
use crate::domains::arena::{BatchDriver, BatchSummary, SceneSampler};
use crate::domains::logger::DynLogger;

pub struct FixtureService {
    config: Config,
    logger: DynLogger,
    sampler: SceneSampler,
}

impl FixtureService {
    pub fn new(config: Config, logger: DynLogger) -> Self {
        Self { config, logger, sampler: SceneSampler::default() }
    }

    pub fn with_sampler(mut self, sampler: SceneSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn driver(&self) -> BatchDriver {
        let generator = &self.config.generator;
        BatchDriver::new(generator.count, generator.seed, self.logger.clone())
            .with_sampler(self.sampler.clone())
    }

    pub fn sink(&self) -> SvgFileSink {
        SvgFileSink::new(&self.config.output.directory, &self.config.output.file_prefix)
    }

    /// Generates the configured batch into the output directory.
    pub fn generate(&self) -> ApplicationResult<BatchSummary> {
        let mut sink = self.sink();
        let driver = self.driver();
        self.logger.info(&format!(
            "Writing {} fixtures (seed {}) to {}",
            driver.count(),
            driver.seed(),
            sink.directory().display()
        ));
        let summary = driver.run(&mut sink)?;
        Ok(summary)
    }
}
