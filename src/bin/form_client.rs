//! 사용자 폼 터미널 클라이언트
//!
//! 폼 컨트롤러를 표준 입력 기반 프롬프트로 구동합니다.
//! 입력 중인 값은 `DRAFT_STORAGE_DIR` 아래에 저장되어 다음 실행에서 복원됩니다.
//!
//! ```text
//! > name Ann
//! > department Eng
//! > mobile 1234567890
//! > check
//! > submit
//! ```

use std::io::{self, BufRead, Write};

use env_logger::Env;
use log::error;
use user_form_backend::client::{
    FieldInput, FileStorage, FormController, HttpSubmissionClient, NotificationKind,
    SubmitOutcome,
};
use user_form_backend::config::ClientConfig;
use user_form_backend::utils::display_terminal::{print_boxed_title, print_sub_task};

type Controller = FormController<FileStorage, HttpSubmissionClient>;

enum Command {
    Input(FieldInput),
    Submit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest),
        None => (line, ""),
    };

    match head {
        "name" | "department" | "mobile" => Command::Input(FieldInput::text(head, rest)),
        "check" => Command::Input(FieldInput::checkbox("checked", true)),
        "uncheck" => Command::Input(FieldInput::checkbox("checked", false)),
        "submit" => Command::Submit,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let base_url = ClientConfig::server_api_url();
    let storage_dir = ClientConfig::draft_storage_dir();

    print_boxed_title("📝 USER FORM");
    print_sub_task("Server", &base_url);
    print_sub_task("Draft storage", &storage_dir);

    let mut controller = FormController::initialize(
        FileStorage::new(&storage_dir),
        HttpSubmissionClient::new(base_url),
    );

    print_help();
    show(&controller);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };

        match parse_command(&line?) {
            Command::Input(input) => {
                if let Err(e) = controller.on_field_change(input) {
                    error!("초안 저장 실패: {}", e);
                }
                show_errors(&controller);
            }
            Command::Submit => {
                match controller.on_submit().await {
                    SubmitOutcome::Busy => println!("A submission is already in progress"),
                    SubmitOutcome::Invalid => show_errors(&controller),
                    SubmitOutcome::Accepted(Some(user)) => println!("Saved as #{}", user.id),
                    _ => {}
                }
                show_notifications(&mut controller);
            }
            Command::Show => show(&controller),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(cmd) if cmd.is_empty() => {}
            Command::Unknown(cmd) => println!("Unknown command: {} (type `help`)", cmd),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands: name <v> | department <v> | mobile <v> | check | uncheck | submit | show | quit");
}

fn show(controller: &Controller) {
    let draft = controller.draft();
    println!("  Name:       {}", draft.name);
    println!("  Department: {}", draft.department);
    println!("  Mobile:     {}", draft.mobile);
    println!("  [{}] Check me out", if draft.checked { "x" } else { " " });
    show_errors(controller);
}

fn show_errors(controller: &Controller) {
    for (field, message) in controller.errors() {
        println!("  ! {}: {}", field, message);
    }
}

fn show_notifications(controller: &mut Controller) {
    for notification in controller.drain_notifications() {
        let marker = match notification.kind {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        };
        println!("{} {}", marker, notification.message);
    }
}
