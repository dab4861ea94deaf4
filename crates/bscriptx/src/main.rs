use bscript::{tokenize, Engine, Recorder, ScriptResult};
use clap::Parser;
use colored::Colorize;
use serde_json::json;
use std::process;

/// Exit codes: 0 = valid, 1 = invalid, 2 = input/tokenization error.
const EXIT_INVALID: i32 = 1;
const EXIT_INPUT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "bscriptx",
    version,
    about = "Bitcoin-style script validator — tokenize, execute, trace"
)]
struct Cli {
    /// Script text, e.g. "3 4 OP_ADD 7 OP_EQUAL"
    script: String,

    /// Print the stack after every step
    #[arg(long)]
    trace: bool,

    /// Emit the result as JSON instead of the VALID/INVALID line
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let tokens = match tokenize(&cli.script) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{} {err}", "tokenization error:".red());
            process::exit(EXIT_INPUT);
        }
    };

    let mut engine = Engine::with_mocks();
    let result = if cli.trace {
        let mut recorder = Recorder::new();
        let result = engine.execute_with_trace(&tokens, &mut recorder);
        for line in recorder.entries() {
            println!("{line}");
        }
        result
    } else {
        engine.execute(&tokens)
    };

    if cli.json {
        print_json(&result);
    } else if result.success {
        println!("Result: {}", "VALID".green());
    } else {
        println!("Result: {} ({})", "INVALID".red(), result.message);
    }

    process::exit(if result.success { 0 } else { EXIT_INVALID });
}

fn print_json(result: &ScriptResult) {
    let stack: Vec<String> = result.final_stack.iter().map(hex::encode).collect();
    let body = json!({
        "success": result.success,
        "message": result.message,
        "final_stack": stack,
    });
    match serde_json::to_string_pretty(&body) {
        Ok(s) => println!("{s}"),
        Err(err) => eprintln!("{} {err}", "json error:".red()),
    }
}
