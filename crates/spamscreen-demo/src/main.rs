use clap::Parser;
use spamscreen_classifiers::{Classifier, ModelBundle, SpamClassifier};
use spamscreen_core::Label;
use spamscreen_demo::app::DemoApp;
use spamscreen_demo::cli::{Cli, Commands};
use spamscreen_demo::speech::SpeechAnnouncer;
use spamscreen_session::{Announcer, HistoryStore, NullAnnouncer, SessionController};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            vectorizer,
            model,
            max_history,
            no_speech,
            verbose,
        } => {
            init_logging(verbose);

            let bundle = load_bundle(&vectorizer, &model)?;
            let classifier = Arc::new(SpamClassifier::new(bundle));
            let announcer: Arc<dyn Announcer> = if no_speech {
                Arc::new(NullAnnouncer)
            } else {
                Arc::new(SpeechAnnouncer::new())
            };
            let controller = SessionController::new(
                classifier,
                announcer,
                HistoryStore::with_capacity(max_history),
            );

            println!();
            println!("  +---------------------------------------------+");
            println!("  |          SpamScreen - Email Spam Demo       |");
            println!("  +---------------------------------------------+");
            println!();
            println!("  Vectorizer: {vectorizer}");
            println!("  Model:      {model}");
            println!();

            DemoApp::new(controller).run().await?;
        }

        Commands::Classify {
            text,
            vectorizer,
            model,
            verbose,
        } => {
            init_logging(verbose);

            let bundle = load_bundle(&vectorizer, &model)?;
            let classifier = SpamClassifier::new(bundle);
            let label = classifier.classify(&text).await?;

            match label {
                Label::Spam => println!("[x] This is A Spam Email"),
                Label::NotSpam => println!("[ok] This is Not A Spam Email"),
            }
        }
    }

    Ok(())
}

fn load_bundle(vectorizer: &str, model: &str) -> anyhow::Result<Arc<ModelBundle>> {
    let bundle = ModelBundle::load(vectorizer, model).map_err(|e| {
        anyhow::anyhow!("cannot start without both model artifacts: {e}")
    })?;
    Ok(Arc::new(bundle))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "spamscreen_classifiers=debug,spamscreen_session=debug,spamscreen_demo=debug"
    } else {
        "spamscreen_classifiers=info,spamscreen_session=info,spamscreen_demo=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
