mod source;

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use protolens_errors::{ParseError, Renderer};
use source::{Lang, SourceFile};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "protolens", about = "Inspect proto3 schemas and text-format data")]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Parse as this language instead of guessing from the file extension
    #[arg(long, value_enum, global = true)]
    lang: Option<Lang>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a file, one per line
    Tokens {
        path: Utf8PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the syntax tree of a file
    Ast {
        path: Utf8PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
    },
    /// Parse files and report the first error in each
    Check {
        #[arg(required = true)]
        paths: Vec<Utf8PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Tree,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let renderer = Renderer::styled();

    match cli.command {
        Command::Tokens { path, json } => {
            let file = SourceFile::read(path, cli.lang)?;
            if json {
                println!("{}", file.tokens_json()?);
                return Ok(ExitCode::SUCCESS);
            }
            for token in file.tokens() {
                let (start, end) = (u32::from(token.start()), u32::from(token.end()));
                println!("{}@{start}..{end} {:?}", token.kind, &file.text[token.range]);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Ast { path, format } => {
            let file = SourceFile::read(path, cli.lang)?;
            match file.parse() {
                Ok(parsed) => {
                    match format {
                        Format::Tree => print!("{}", parsed.to_tree_string()),
                        Format::Json => println!("{}", parsed.to_json()?),
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(error) => {
                    report(&renderer, &file, &error);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Check { paths } => {
            let mut failed = 0usize;
            for path in paths {
                let file = SourceFile::read(path, cli.lang)?;
                if let Err(error) = file.parse() {
                    report(&renderer, &file, &error);
                    failed += 1;
                }
            }

            tracing::info!(failed, "check finished");
            Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn report(renderer: &Renderer, file: &SourceFile, error: &ParseError) {
    eprintln!("{}", error.render(renderer, file.path.as_str(), &file.text));
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "protolens=warn",
        1 => "protolens=info,protolens_parse=debug,protolens_textproto=debug",
        _ => "protolens=trace,protolens_parse=trace,protolens_textproto=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "protolens=warn");
        assert_eq!(
            directive_for_verbosity(1),
            "protolens=info,protolens_parse=debug,protolens_textproto=debug"
        );
        assert_eq!(
            directive_for_verbosity(3),
            "protolens=trace,protolens_parse=trace,protolens_textproto=trace"
        );
    }

    #[test]
    fn cli_arguments() {
        let cli = Cli::try_parse_from(["protolens", "-vv", "ast", "a.txt", "--format", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Ast { format: Format::Json, .. }));

        let cli =
            Cli::try_parse_from(["protolens", "check", "a.proto", "b.proto", "--lang", "textproto"])
                .unwrap();
        assert_eq!(cli.lang, Some(Lang::Textproto));
        assert!(matches!(cli.command, Command::Check { ref paths } if paths.len() == 2));

        assert!(Cli::try_parse_from(["protolens", "check"]).is_err());
    }
}
