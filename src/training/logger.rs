//! Training progress logging.

/// How much training output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Start/finish banners and one line per epoch.
    Info,
    /// Info plus per-epoch learning-rate detail.
    Debug,
}

/// Println-based progress reporter, gated on [`Verbosity`].
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn start_training(&self, link: &str, n_epochs: usize) {
        if self.verbosity >= Verbosity::Info {
            println!("[{link}] start training: {n_epochs} epochs");
        }
    }

    pub fn log_epoch(&self, epoch: usize, cost: f64, rate: f32) {
        match self.verbosity {
            Verbosity::Silent => {}
            Verbosity::Info => println!("epoch {epoch}: cost={cost:.6}"),
            Verbosity::Debug => {
                println!("epoch {epoch}: cost={cost:.6} learning_rate={rate:.6}")
            }
        }
    }

    pub fn finish_training(&self, link: &str) {
        if self.verbosity >= Verbosity::Info {
            println!("[{link}] training finished");
        }
    }
}
