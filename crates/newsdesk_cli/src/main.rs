//! Newsdesk command-line front end.
//!
//! # Responsibility
//! - Play the request-boundary role: decode JSON article payloads into the
//!   core registry and print query results as JSON.
//! - Map core errors to stderr messages and a nonzero exit status.

use newsdesk_core::{
    default_log_level, init_logging, Article, ArticleService, MemoryArticleRepository,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process::ExitCode;

const USAGE: &str = "usage: newsdesk <articles.jsonl> get <id>
       newsdesk <articles.jsonl> summary <tag> <YYYY-MM-DD>";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("NEWSDESK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("newsdesk: {err}");
            return ExitCode::FAILURE;
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("newsdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    let (path, command) = match args {
        [path, rest @ ..] if !rest.is_empty() => (path, rest),
        _ => return Err(USAGE.to_string()),
    };

    let service = ArticleService::new(MemoryArticleRepository::new());
    load_articles(path, &service)?;

    match command {
        [cmd, id] if cmd == "get" => {
            let id = id
                .parse()
                .map_err(|_| format!("article id `{id}` is not an integer"))?;
            let article = service.get_article(id).map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&article).map_err(|err| err.to_string())
        }
        [cmd, tag, date] if cmd == "summary" => {
            let summary = service
                .tag_summary(tag, date)
                .map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&summary).map_err(|err| err.to_string())
        }
        _ => Err(USAGE.to_string()),
    }
}

fn load_articles(
    path: &str,
    service: &ArticleService<MemoryArticleRepository>,
) -> Result<(), String> {
    let file = File::open(path).map_err(|err| format!("cannot open `{path}`: {err}"))?;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|err| format!("cannot read `{path}`: {err}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let article: Article = serde_json::from_str(&line)
            .map_err(|err| format!("{path}:{}: invalid article payload: {err}", index + 1))?;
        service
            .add_article(article)
            .map_err(|err| format!("{path}:{}: {err}", index + 1))?;
    }

    Ok(())
}
