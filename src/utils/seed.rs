//! Reproducibility setup for torch

/// Seed the global torch generator and, when `deterministic` is set, pin
/// intra-op parallelism to a single thread.
///
/// Network initialization and latent noise both draw from the global torch
/// generator, so this must run before the model is built.
pub fn seed_everything(seed: u64, deterministic: bool) {
    tch::manual_seed(seed as i64);
    if deterministic {
        tch::set_num_threads(1);
    }
    tracing::debug!("Seeded torch with {} (deterministic: {})", seed, deterministic);
}

