use super::types::Scene;
use crate::common::DomainResult;

/// Port for the collaborator that persists each generated scene.
/// Implementations (adapters) decide on format and destination.
pub trait SceneSink {
    fn write_scene(&mut self, identifier: &str, scene: &Scene) -> DomainResult<()>;
}

/// Collects scenes in memory.
impl SceneSink for Vec<(String, Scene)> {
    fn write_scene(&mut self, identifier: &str, scene: &Scene) -> DomainResult<()> {
        self.push((identifier.to_string(), scene.clone()));
        Ok(())
    }
}
