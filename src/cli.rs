//! Interactive stdin/stdout runner for the wizard.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::answers::FileUpload;
use crate::catalog::{QuestionDefinition, QuestionKind};
use crate::error::Result;
use crate::session::{Step, SubmissionState, WizardSession};
use crate::submit::Submitter;

/// Walk the wizard over stdin/stdout until submission succeeds, the user
/// quits, or stdin closes.
pub async fn run(session: &mut WizardSession, submitter: &Submitter) -> Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        match session.step() {
            Step::Question(_) => {
                let question = session.current_question();
                print_question(session, &question);
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                let input = line.trim().to_string();
                if input.is_empty() {
                    continue;
                }
                if input == "/back" {
                    session.back();
                    continue;
                }
                apply_input(session, &question, &input).await;
                let before = session.step();
                if session.advance() == before {
                    eprintln!("✗ That answer is not valid, try again.");
                }
            }
            Step::Review => {
                print_review(session);
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                match line.trim() {
                    "yes" | "y" | "submit" => match submitter.submit(session).await {
                        Ok(()) => {
                            println!("\n✅ Account created. You can now log in.");
                            return Ok(());
                        }
                        Err(e) => eprintln!("❌ {}", e),
                    },
                    "edit" | "back" | "/back" => {
                        session.back();
                    }
                    "quit" | "/quit" => return Ok(()),
                    _ => eprintln!("Type 'yes' to submit, 'edit' to go back, 'quit' to abandon."),
                }
            }
        }
    }
    Ok(())
}

/// Store one line of input against the current question.
async fn apply_input(session: &mut WizardSession, question: &QuestionDefinition, input: &str) {
    match question.kind {
        QuestionKind::File => match tokio::fs::read(input).await {
            Ok(bytes) => {
                let file_name = std::path::Path::new(input)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_string());
                let content_type = content_type_for(&file_name).to_string();
                session.attach_file(FileUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Err(e) => eprintln!("✗ Could not read {}: {}", input, e),
        },
        QuestionKind::SingleSelect => {
            // Accept the option number or the literal option text.
            let value = input
                .parse::<usize>()
                .ok()
                .and_then(|n| question.options.get(n.checked_sub(1)?))
                .cloned()
                .unwrap_or_else(|| input.to_string());
            session.answer_text(value);
        }
        _ => session.answer_text(input),
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

fn print_question(session: &WizardSession, question: &QuestionDefinition) {
    let (position, total) = session.progress();
    println!("\n[{}/{}] {}", position, total, question.text);
    if question.kind == QuestionKind::SingleSelect {
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
    }
    let current = session.answers().text(question.id);
    if !current.is_empty() {
        println!("  (current: {})", current);
    }
    eprint!("({}) > ", question.placeholder);
}

fn print_review(session: &WizardSession) {
    println!("\n── Review ──");
    for question in session.sequence() {
        let value = match question.kind {
            QuestionKind::Password => "••••••".to_string(),
            QuestionKind::File => session
                .answers()
                .file(question.id)
                .map(|f| f.file_name.clone())
                .unwrap_or_default(),
            _ => session.answers().text(question.id).to_string(),
        };
        println!("  {:>14}: {}", question.id, value);
    }
    if let SubmissionState::Failed(message) = session.submission() {
        println!("  Last attempt failed: {}", message);
    }
    eprint!("Submit? (yes/edit/quit) > ");
}
