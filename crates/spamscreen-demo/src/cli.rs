use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spamscreen-demo")]
#[command(
    author,
    version,
    about = "Interactive email spam classifier demo"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive classification session
    Start {
        /// Vectorizer artifact path
        #[arg(long, default_value = "./models/vectorizer.json")]
        vectorizer: String,

        /// Classifier model artifact path
        #[arg(long, default_value = "./models/spam.json")]
        model: String,

        /// Maximum history records to keep (unbounded when omitted)
        #[arg(long)]
        max_history: Option<usize>,

        /// Disable spoken announcements
        #[arg(long)]
        no_speech: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify a single message and exit
    Classify {
        /// The email text to classify
        text: String,

        /// Vectorizer artifact path
        #[arg(long, default_value = "./models/vectorizer.json")]
        vectorizer: String,

        /// Classifier model artifact path
        #[arg(long, default_value = "./models/spam.json")]
        model: String,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
