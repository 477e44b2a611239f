use std::collections::HashMap;

use super::{AnalysisError, AnalysisResult, Analyzer, LolAnalyzer};
use crate::game::GameType;

/// The analyzers available to a caller, one per game. Built once by whoever
/// serves reports and handed to the code that needs it.
#[derive(Default)]
pub struct AnalyzerRegistry
{
    analyzers: HashMap<GameType, Box<dyn Analyzer>>,
}

impl AnalyzerRegistry
{
    /// An empty registry. See `with_defaults` for one that knows all games
    /// with an analyzer.
    pub fn new() -> Self { Self::default() }

    /// A registry with every analyzer that is implemented.
    pub fn with_defaults() -> Self
    {
        let mut registry = Self::new();
        registry.register(Box::new(LolAnalyzer::new()));

        registry
    }

    /// Add an analyzer for the game it reports in `Analyzer::game`.
    ///
    /// # Returns
    /// The analyzer that was registered for the game before, if any.
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) -> Option<Box<dyn Analyzer>>
    {
        self.analyzers.insert(analyzer.game(), analyzer)
    }

    /// # Errors
    /// `AnalysisError::UnsupportedGame` if no analyzer is registered for the
    /// game.
    pub fn get(&self, game: GameType) -> AnalysisResult<&dyn Analyzer>
    {
        self.analyzers
            .get(&game)
            .map(|analyzer| analyzer.as_ref())
            .ok_or(AnalysisError::UnsupportedGame(game))
    }

    /// All games with an analyzer, in a fixed order.
    pub fn supported_games(&self) -> Vec<GameType>
    {
        let mut games: Vec<GameType> = self.analyzers.keys().copied().collect();
        games.sort();

        games
    }
}
