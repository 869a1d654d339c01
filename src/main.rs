use itertools::Itertools as _;
use querystudio::*;
use std::io::Read as _;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: querystudio <format|highlight|lint|analyze|check|complete <offset>|templates [query]|views> < query.sql";

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            if matches!(e, Error::Usage(_)) {
                eprintln!("{USAGE}");
            }
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String> {
    let config = Config::from_env()?;
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| Error::Usage("missing command".to_string()))?;
    debug!("running {command} with {} argument(s)", rest.len());

    match command.as_str() {
        "templates" => return Ok(list_templates(&rest.join(" "))),
        "views" => return Ok(list_views()),
        _ => {}
    }

    let source = read_stdin()?;
    let output = match command.as_str() {
        "format" => format_with(&source, &FormatOptions::from(&config)),
        "highlight" => highlight(&source),
        "lint" => render_lint(&source),
        "analyze" => render_analysis(&source),
        "check" => {
            let mut sections = vec![TextStats::of(&source).to_string()];
            if config.show_validation {
                sections.push(render_lint(&source));
            }
            if config.show_explain {
                sections.push(render_analysis(&source));
            }
            sections.join("\n\n")
        }
        "complete" => {
            let offset = match rest {
                [offset] => offset
                    .parse::<usize>()
                    .map_err(|e| Error::Usage(format!("bad offset {offset:?}: {e}")))?,
                _ => return Err(Error::Usage("complete takes one offset".to_string())),
            };
            let cursor = Cursor::at(offset);
            if !cursor.is_within(&source) {
                return Err(Error::CursorOutOfRange {
                    offset,
                    len: source.len(),
                });
            }
            render_completion(&source, cursor)
        }
        other => return Err(Error::Usage(format!("unknown command {other:?}"))),
    };
    Ok(output)
}

fn read_stdin() -> Result<String> {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn render_lint(source: &str) -> String {
    let diagnostics = lint(source);
    if diagnostics.is_empty() {
        return "No issues found.".to_string();
    }
    diagnostics
        .iter()
        .map(|d| match &d.span {
            Some(span) => {
                let at = Cursor::at(span.start).line_col(source);
                format!("{at}: {d}")
            }
            None => d.to_string(),
        })
        .join("\n")
}

fn render_analysis(source: &str) -> String {
    analyze(source).map_or_else(|| "Empty query.".to_string(), |result| result.to_string())
}

fn render_completion(source: &str, cursor: Cursor) -> String {
    let completion = complete_at(source, cursor);
    let Some(menu) = CompletionMenu::open(completion) else {
        return String::new();
    };
    menu.visible()
        .iter()
        .map(|c| match c.hint {
            "" => format!("{c}\t{}", c.category),
            hint => format!("{c}\t{}\t{hint}", c.category),
        })
        .join("\n")
}

fn list_templates(query: &str) -> String {
    search_templates(query)
        .iter()
        .map(|t| format!("{t}\n    {}", t.description))
        .join("\n")
}

fn list_views() -> String {
    system_views()
        .map(|view| format!("{view}\t{}", view.hint))
        .join("\n")
}
