use clap::Parser;

use lambda_systemf::checker::type_check;
use lambda_systemf::context::Context;
use lambda_systemf::parser::parse_term;

#[derive(Parser)]
#[command(
    name = "lambda_systemf",
    about = "Type checker for a lambda calculus with universal types"
)]
struct Cli {
    /// Term to check, e.g. "lambda x:a->b.(x y)"
    source: String,
    /// Typing context in the form "name:type, name:type, ..."
    #[arg(long, default_value = "")]
    context: String,
}

fn main() {
    let cli = Cli::parse();

    let context = match Context::parse(&cli.context) {
        Ok(context) => context,
        Err(err) => {
            eprintln!("In context: {}", err);
            std::process::exit(1);
        }
    };

    let term = match parse_term(&cli.source) {
        Ok(term) => term,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", mark_position(&cli.source, err.position()));
            std::process::exit(1);
        }
    };

    match type_check(&term, &context) {
        Ok(ty) => {
            println!("Type check successful");
            println!("Term's type: {}", ty);
        }
        Err(err) => {
            eprintln!("Type check unsuccessful");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// The line containing `position`, with a caret under the offending column.
fn mark_position(source: &str, position: usize) -> String {
    let position = position.min(source.len());
    let start = source[..position].rfind('\n').map_or(0, |i| i + 1);
    let end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    format!("{}\n{}^", &source[start..end], " ".repeat(position - start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_caret_sits_under_the_offset() {
        assert_eq!(mark_position("x+y", 1), "x+y\n ^");
    }

    #[test]
    fn the_caret_can_point_past_the_source() {
        assert_eq!(mark_position("lambda", 6), "lambda\n      ^");
    }
}
