//! Interactive terminal loop hosting the session controller

use spamscreen_core::Label;
use spamscreen_session::{Mode, SessionController, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};

const ABOUT_TEXT: &str = "\
This application uses a machine learning model to classify emails as
spam or not spam, based on the words the email contains.

How it works:
  - Paste the content of an email at the prompt.
  - The model vectorizes the text against a pre-learned vocabulary and
    predicts whether it is spam.
  - Every verdict is kept in the session history until you clear it or
    quit.";

/// The interactive demo surface.
///
/// Three modes mirror the three sections of the UI: classify, history,
/// about. The mode only controls what a plain input line means; all real
/// work goes through the session controller.
pub struct DemoApp {
    controller: SessionController,
    mode: Mode,
}

impl DemoApp {
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            mode: Mode::default(),
        }
    }

    /// Run the interaction loop until EOF or `:quit`
    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("Type :help for commands.");
        println!();
        self.enter_mode(Mode::Classify);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = line.trim();
            match input {
                ":quit" | ":exit" => break,
                ":help" => print_help(),
                ":classify" => self.enter_mode(Mode::Classify),
                ":history" => self.enter_mode(Mode::History),
                ":about" => self.enter_mode(Mode::About),
                ":clear" => {
                    self.controller.clear_history();
                    println!("History has been cleared.");
                }
                _ => self.handle_input(&line).await?,
            }
            println!();
        }

        println!("Goodbye.");
        Ok(())
    }

    fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Classify => {
                println!("-- Classification --");
                println!("Enter the email content below to check if it's spam or not.");
            }
            Mode::History => {
                println!("-- Classification History --");
                self.print_history();
            }
            Mode::About => {
                println!("-- About This Application --");
                println!("{ABOUT_TEXT}");
            }
        }
    }

    async fn handle_input(&mut self, line: &str) -> anyhow::Result<()> {
        match self.mode {
            Mode::Classify => match self.controller.submit(line).await? {
                SubmitOutcome::Classified(Label::Spam) => {
                    println!("[x] This is A Spam Email");
                }
                SubmitOutcome::Classified(Label::NotSpam) => {
                    println!("[ok] This is Not A Spam Email");
                }
                SubmitOutcome::EmptyInput => {
                    println!("Please enter email content to classify.");
                }
            },
            // Plain text means nothing outside classify mode.
            Mode::History | Mode::About => {
                println!("Type :classify to classify a message, or :help for commands.");
            }
        }
        Ok(())
    }

    fn print_history(&self) {
        let history = self.controller.history();
        if history.is_empty() {
            println!("No classification history available.");
            return;
        }
        for (i, record) in history.iter().enumerate() {
            println!("{}. Email: {}", i + 1, record.message);
            println!("   Classification: {}", record.label);
            println!("---");
        }
        println!("Type :clear to clear the history.");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :classify   switch to classification mode");
    println!("  :history    show the session history");
    println!("  :about      about this application");
    println!("  :clear      clear the session history");
    println!("  :quit       exit");
    println!();
    println!("In classification mode, any other line is classified.");
}
