use crate::session::SessionOutcome;
use colored::*;

pub fn print_session_summary(outcome: &SessionOutcome, colored: bool) {
    println!();
    match outcome {
        SessionOutcome::Closed => {
            if colored {
                println!("{}", "Closed without saving.".yellow());
            } else {
                println!("Closed without saving.");
            }
        }
        SessionOutcome::Completed { approved, skipped } => {
            if *skipped == 0 {
                if colored {
                    println!("{}", "✓ No unresolved spelling errors!".green().bold());
                } else {
                    println!("✓ No unresolved spelling errors!");
                }
            } else {
                let word = if *skipped == 1 { "word" } else { "words" };
                if colored {
                    println!(
                        "{} {} unresolved {} remain",
                        "✗".red().bold(),
                        skipped.to_string().red().bold(),
                        word
                    );
                } else {
                    println!("✗ {} unresolved {} remain", skipped, word);
                }
            }

            if *approved > 0 {
                let word = if *approved == 1 { "word" } else { "words" };
                if colored {
                    println!(
                        "{} {} {} added to the custom dictionary",
                        "✓".green().bold(),
                        approved.to_string().green().bold(),
                        word
                    );
                } else {
                    println!("✓ {} {} added to the custom dictionary", approved, word);
                }
            }
        }
    }
}
