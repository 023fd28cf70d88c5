use colored::*;
use lockmac::dispatch::{self, CmdMessage, MessageLevel};
use lockmac::session::SystemLock;

fn main() {
    // Arguments may not be valid UTF-8; lossy text still classifies and
    // prints like any other token.
    let mut argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = argv.next().unwrap_or_else(|| "lockmac".to_string());
    let args: Vec<String> = argv.collect();

    match dispatch::run(&SystemLock, &program, &args) {
        Ok(result) => {
            print_messages(&result.messages);
            std::process::exit(result.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
