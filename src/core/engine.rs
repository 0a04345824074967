use crate::core::source::{parse_games, InputFormat};
use crate::core::stats::{self, DashboardStats};
use crate::domain::model::Game;
use crate::domain::ports::{Pipeline, SettingsProvider, Storage};
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::validate_file_extension;

/// Reads game entries, validates them and writes the dashboard report.
pub struct AnalyticsPipeline<S: Storage, C: SettingsProvider> {
    pub(crate) storage: S,
    pub(crate) settings: C,
}

impl<S: Storage, C: SettingsProvider> AnalyticsPipeline<S, C> {
    pub fn new(storage: S, settings: C) -> Self {
        Self { storage, settings }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SettingsProvider> Pipeline for AnalyticsPipeline<S, C> {
    type Report = DashboardStats;

    async fn extract(&self) -> Result<Vec<Game>> {
        let input = self.settings.input_path();
        let extension = validate_file_extension("input", input, &["json", "csv"])?;
        let format = InputFormat::from_extension(&extension)?;

        let data = self.storage.read_file(input).await?;
        let entries = parse_games(&data, format)?;

        let mut games = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let fallback_id = (index + 1).to_string();
            games.push(entry.into_game(&fallback_id)?);
        }

        if let Some(dup) = first_duplicate_id(&games) {
            return Err(AnalyticsError::InvalidGame {
                game: dup.to_string(),
                reason: "game id appears more than once".to_string(),
            });
        }

        Ok(games)
    }

    async fn transform(&self, games: Vec<Game>) -> Result<DashboardStats> {
        Ok(stats::compute(&games, self.settings.recent_games()))
    }

    async fn load(&self, report: DashboardStats) -> Result<String> {
        let body = if self.settings.pretty_report() {
            serde_json::to_vec_pretty(&report)?
        } else {
            serde_json::to_vec(&report)?
        };

        let output = self.settings.output_path();
        self.storage.write_file(output, &body).await?;
        Ok(output.to_string())
    }
}

fn first_duplicate_id(games: &[Game]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    games
        .iter()
        .map(|g| g.id.as_str())
        .find(|id| !seen.insert(*id))
}

pub struct AnalyticsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalyticsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Importing games...");
        let games = self.pipeline.extract().await?;
        tracing::info!("Imported {} games", games.len());

        tracing::info!("Computing dashboard statistics...");
        let report = self.pipeline.transform(games).await?;

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn put(&self, path: &str, data: &str) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AnalyticsError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestSettings {
        input: &'static str,
    }

    impl SettingsProvider for TestSettings {
        fn input_path(&self) -> &str {
            self.input
        }
        fn output_path(&self) -> &str {
            "out/dashboard.json"
        }
        fn recent_games(&self) -> usize {
            2
        }
        fn pretty_report(&self) -> bool {
            false
        }
    }

    fn game_json(id: &str, date: &str, first: &str) -> String {
        let rest = vec![r#"{"score": 5}"#; 9].join(",");
        format!(r#"{{"id": "{id}", "date": "{date}", "frames": [{first},{rest}]}}"#)
    }

    #[tokio::test]
    async fn test_run_writes_report() {
        let storage = MockStorage::default();
        let input = format!(
            "[{},{},{}]",
            game_json("a", "2024-01-01", r#"{"score": 10, "is_strike": true}"#),
            game_json("b", "2024-01-03", r#"{"score": 12, "is_spare": true}"#),
            game_json("c", "2024-01-02", r#"{"score": 0}"#)
        );
        storage.put("games.json", &input).await;

        let pipeline = AnalyticsPipeline::new(storage.clone(), TestSettings { input: "games.json" });
        let path = AnalyticsEngine::new(pipeline).run().await.unwrap();
        assert_eq!(path, "out/dashboard.json");

        let body = storage.get("out/dashboard.json").await.unwrap();
        let report: DashboardStats = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.total_games, 3);
        assert_eq!(report.high_score, 57);
        assert_eq!(report.low_score, 45);
        assert_eq!(report.marks.strikes.count, 1);
        assert_eq!(report.marks.spares.count, 1);
        let recent: Vec<&str> = report.recent_games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(recent, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_invalid_frame_aborts_import() {
        let storage = MockStorage::default();
        let input = format!(
            "[{}]",
            game_json("a", "2024-01-01", r#"{"score": 7, "is_strike": true}"#)
        );
        storage.put("games.json", &input).await;

        let pipeline = AnalyticsPipeline::new(storage.clone(), TestSettings { input: "games.json" });
        let err = AnalyticsEngine::new(pipeline).run().await.unwrap_err();
        match err {
            AnalyticsError::InvalidFrame { game, frame, reason } => {
                assert_eq!(game, "a");
                assert_eq!(frame, 1);
                assert_eq!(reason, "Strike frames must have a score of 10");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(storage.get("out/dashboard.json").await.is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let storage = MockStorage::default();
        let input = format!(
            "[{},{}]",
            game_json("a", "2024-01-01", r#"{"score": 1}"#),
            game_json("a", "2024-01-02", r#"{"score": 2}"#)
        );
        tokio_test::block_on(storage.put("games.json", &input));

        let pipeline = AnalyticsPipeline::new(storage, TestSettings { input: "games.json" });
        let err = tokio_test::block_on(pipeline.extract()).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidGame { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let pipeline = AnalyticsPipeline::new(MockStorage::default(), TestSettings { input: "games.txt" });
        assert!(pipeline.extract().await.is_err());
    }
}
