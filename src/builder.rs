use crate::engine::{KnapsackEngine, Strategy};

pub struct KnapsackEngineBuilder {
    strategy: Option<Strategy>,
}

impl KnapsackEngineBuilder {
    pub fn new() -> Self {
        Self { strategy: None }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> KnapsackEngine {
        match self.strategy {
            Some(s) => KnapsackEngine::with_strategy(s),
            None => KnapsackEngine::new(),
        }
    }
}

impl Default for KnapsackEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_layered() {
        assert_eq!(KnapsackEngineBuilder::new().build().strategy(), Strategy::Layered);
    }

    #[test]
    fn honours_explicit_strategy() {
        let engine = KnapsackEngineBuilder::default()
            .with_strategy(Strategy::Dijkstra)
            .build();
        assert_eq!(engine.strategy(), Strategy::Dijkstra);
    }
}
