use std::process;
use calculator::cli::CliArgs;
use calculator::eval::Calculator;
use calculator::shell::{Editor, Session};

use clap::Parser;
use error_chain::ChainedError;
use log::debug;

fn main() {
    env_logger::init();
    let args = CliArgs::parse();

    if let Some(input) = args.expression() {
        debug!("Evaluating {:?} from the command line", input);
        match Calculator::new().eval(&input) {
            Ok(x) => println!("{}", x),
            Err(e) => {
                eprintln!("{}", e.display_chain());
                process::exit(1);
            }
        }
        return;
    }

    let res = Editor::new().and_then(|editor| Session::new(editor, std::io::stdout()).run());
    if let Err(e) = res {
        eprintln!("💥 A critical error occurred: {}", e.display_chain());
        process::exit(1);
    }
}
