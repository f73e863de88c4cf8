//! End-to-end run: load, prepare, train, evaluate

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::{prepare, DataLoader, TabularDataset};
use crate::error::Result;
use crate::evaluation::{EvaluationReport, Evaluator};
use crate::model::{CriticConfig, GeneratorConfig, Wgan};
use crate::training::{Trainer, TrainingSummary};
use crate::utils::{seed_everything, Config};

/// Everything a pipeline run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Training outcome
    pub training: TrainingSummary,
    /// Critic evaluation on held-out rows
    pub evaluation: EvaluationReport,
}

/// Run the pipeline on the CSV named in `config.data.path`
pub fn run_pipeline(config: &Config) -> Result<PipelineReport> {
    config.validate()?;

    info!("Loading data from {}", config.data.path);
    let dataset = TabularDataset::load_csv(&config.data.path)?;
    info!(
        "Loaded {} rows with {} features",
        dataset.len(),
        dataset.num_features()
    );

    run_on_dataset(config, &dataset)
}

/// Run the pipeline on an in-memory dataset
pub fn run_on_dataset(config: &Config, dataset: &TabularDataset) -> Result<PipelineReport> {
    config.validate()?;
    seed_everything(config.data.seed, config.training.deterministic);
    let device = config.get_device();

    let prepared = prepare(dataset, config.data.test_fraction, config.data.seed)?;
    info!(
        "Split into {} train and {} test rows",
        prepared.train.len(),
        prepared.test.len()
    );

    let num_features = dataset.num_features() as i64;
    let mut model = Wgan::new(
        GeneratorConfig {
            latent_dim: config.model.latent_dim,
            output_dim: num_features,
            hidden_dims: config.model.gen_hidden,
        },
        CriticConfig {
            input_dim: num_features,
            hidden_dims: config.model.critic_hidden,
        },
        device,
    );

    let mut data_loader = DataLoader::new(
        prepared.train.features.clone(),
        config.data.batch_size,
        config.data.shuffle,
        false,
        config.data.seed,
    );

    let mut trainer = Trainer::new(config.training_config(), device);
    let training = trainer.train(&mut model, &mut data_loader)?;

    let evaluator = Evaluator::new(config.evaluation_config(), &prepared.scaler);
    let evaluation = evaluator.evaluate(&model, &prepared.test)?;
    evaluation.log();

    Ok(PipelineReport {
        training,
        evaluation,
    })
}
