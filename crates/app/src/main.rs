use std::fmt;
use std::io::{BufRead, Write};

use drill_core::model::{QuestionRecord, QuizSession};
use services::{
    AnswerStep, Clock, DEFAULT_QUIZ_SIZE, QuestionView, QuizLoopService, QuizReport, SourceError,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    source: String,
    count: usize,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--source <path-or-url>] [--count <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source verb_1.csv");
    eprintln!("  --count {DEFAULT_QUIZ_SIZE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_SOURCE, DRILL_COUNT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut source = std::env::var("DRILL_SOURCE")
            .ok()
            .unwrap_or_else(|| "verb_1.csv".into());
        let mut count = std::env::var("DRILL_COUNT")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(DEFAULT_QUIZ_SIZE);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => source = require_value(args, "--source")?,
                "--count" => {
                    let value = require_value(args, "--count")?;
                    count = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { source, count })
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).inspect_err(|_| print_usage())?;

    let pool = load_pool(&args.source).await.map_err(|err| {
        tracing::error!(error = %err, source = %args.source, "failed to prepare question pool");
        match err {
            SourceError::EmptyPool => "出題する問題がありません。",
            _ => "クイズデータの読み込みに失敗しました。ファイルを確認してください。",
        }
    })?;

    let flow = QuizLoopService::new(Clock::default_clock()).with_sample_size(args.count);
    let mut session = flow.start_quiz(&pool)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    loop {
        let report = run_session(&flow, &mut session, &mut input)?;
        print_report(&report);

        if !report.offer_review || !ask_yes_no(&mut input, "間違えた問題を復習しますか？ [y/N] ")? {
            break;
        }
        session = flow.start_review(&session)?;
    }

    Ok(())
}

async fn load_pool(source: &str) -> Result<Vec<QuestionRecord>, SourceError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        services::load_from_url(source).await
    } else {
        services::load_from_path(source)
    }
}

fn run_session(
    flow: &QuizLoopService,
    session: &mut QuizSession,
    input: &mut impl BufRead,
) -> Result<QuizReport, Box<dyn std::error::Error>> {
    let mut view =
        QuestionView::for_current(session).ok_or("session has no current question")?;

    loop {
        print_question(&view);
        let answer = read_line(input)?;
        match flow.answer_current(session, &answer)? {
            AnswerStep::Next(next) => view = next,
            AnswerStep::Finished(report) => return Ok(report),
        }
    }
}

fn print_question(view: &QuestionView) {
    let action = if view.is_last { "答え合わせ" } else { "次へ" };
    println!();
    println!("{}", view.counter);
    println!("{}", view.prompt);
    print!("答え ({action}): ");
    let _ = std::io::stdout().flush();
}

fn print_report(report: &QuizReport) {
    println!();
    println!("{}", report.date_stamp);
    println!("{}  {}", report.tier.caption(), report.score_line);
    println!();
    for row in &report.rows {
        let mark = if row.is_correct { "○" } else { "✗" };
        println!(
            "{mark} {} | {} | {}",
            row.prompt, row.given, row.correct_answer
        );
    }
}

fn ask_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool, std::io::Error> {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    let line = read_line(input)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}

fn read_line(input: &mut impl BufRead) -> Result<String, std::io::Error> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
