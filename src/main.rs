use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use worshiproom::catalog::{current_user, parse_timestamp};
use worshiproom::error::{QuizError, WallError};
use worshiproom::logging;
use worshiproom::model::limits::WallLimits;
use worshiproom::quiz::defs::{builtin_destinations, builtin_questions};
use worshiproom::quiz::parse_answers;
use worshiproom::report::json::{render_feed_json, render_json, render_quiz_json};
use worshiproom::report::text::{
    render_crisis_text, render_dashboard_text, render_destinations_text, render_feed_text, render_prayer_text,
    render_profile_text, render_questions_text, render_quiz_text,
};
use worshiproom::report::{QuizReport, feed_page};
use worshiproom::wall::PrayerFeed;
use worshiproom::wall::moderation::{validate_comment, validate_prayer};
use worshiproom::wall::views::{dashboard, prayer_detail, profile};

#[derive(Parser, Debug)]
#[command(name = "worshiproom", version, about)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Score quiz answers, e.g. `--answers 0,2,-,1,3`.
    Quiz {
        #[arg(long, allow_hyphen_values = true)]
        answers: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the quiz questions and option indices.
    Questions {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    Destinations {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print one page of the Prayer Wall.
    Wall {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[command(flatten)]
        opts: ViewOpts,
    },
    Prayer {
        id: String,
        #[command(flatten)]
        opts: ViewOpts,
    },
    Profile {
        user_id: String,
        #[command(flatten)]
        opts: ViewOpts,
    },
    /// Check a draft prayer (or comment) against the posting rules.
    Check {
        text: String,
        #[arg(long)]
        comment: bool,
    },
    /// The signed-in user's dashboard.
    Dashboard {
        #[command(flatten)]
        opts: ViewOpts,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
struct ViewOpts {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Reference time for relative dates (RFC 3339); defaults to the clock.
    #[arg(long)]
    now: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Wall(#[from] WallError),
    #[error("content mentions self-harm and was not posted\n{resources}")]
    Crisis { resources: String },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid --now `{value}`: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(cli.command) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match now {
        None => Ok(Utc::now()),
        Some(value) => parse_timestamp(value).map_err(|source| CliError::Timestamp {
            value: value.to_string(),
            source,
        }),
    }
}

fn full_feed() -> PrayerFeed {
    let mut feed = PrayerFeed::load(WallLimits::default_v1());
    feed.load_all();
    feed
}

fn run(command: Command) -> Result<String, CliError> {
    match command {
        Command::Quiz { answers, format } => {
            let answers = parse_answers(&answers)?;
            let report = QuizReport::build(&answers);
            tracing::info!(destination = %report.destination.key, "quiz scored");
            Ok(match format {
                Format::Text => render_quiz_text(&report),
                Format::Json => render_quiz_json(&report)? + "\n",
            })
        }
        Command::Questions { format } => Ok(match format {
            Format::Text => render_questions_text(),
            Format::Json => render_json(builtin_questions())? + "\n",
        }),
        Command::Destinations { format } => Ok(match format {
            Format::Text => render_destinations_text(),
            Format::Json => render_json(builtin_destinations())? + "\n",
        }),
        Command::Wall { page, opts } => {
            let now = resolve_now(opts.now.as_deref())?;
            let mut feed = PrayerFeed::load(WallLimits::default_v1());
            let page = feed_page(&mut feed, page, now);
            tracing::info!(page = page.page, prayers = page.prayers.len(), "wall page loaded");
            Ok(match opts.format {
                Format::Text => render_feed_text(&page),
                Format::Json => render_feed_json(&page)? + "\n",
            })
        }
        Command::Prayer { id, opts } => {
            let now = resolve_now(opts.now.as_deref())?;
            let feed = full_feed();
            let detail = prayer_detail(&feed, &id).ok_or(WallError::PrayerNotFound(id))?;
            Ok(match opts.format {
                Format::Text => render_prayer_text(&detail, now),
                Format::Json => render_json(&detail)? + "\n",
            })
        }
        Command::Profile { user_id, opts } => {
            let now = resolve_now(opts.now.as_deref())?;
            let feed = full_feed();
            let view = profile(&feed, &user_id).ok_or(WallError::UserNotFound(user_id))?;
            Ok(match opts.format {
                Format::Text => render_profile_text(&view, now),
                Format::Json => render_json(&view)? + "\n",
            })
        }
        Command::Check { text, comment } => {
            let limits = WallLimits::default_v1();
            let checked = if comment {
                validate_comment(&text, &limits)
            } else {
                validate_prayer(&text, &limits)
            };
            match checked {
                Ok(content) => Ok(format!(
                    "Ready to post ({} characters)\n",
                    content.chars().count()
                )),
                Err(WallError::CrisisDetected) => Err(CliError::Crisis {
                    resources: render_crisis_text(),
                }),
                Err(err) => Err(err.into()),
            }
        }
        Command::Dashboard { opts } => {
            let now = resolve_now(opts.now.as_deref())?;
            let feed = full_feed();
            let view = dashboard(&feed, &current_user());
            Ok(match opts.format {
                Format::Text => render_dashboard_text(&view, now),
                Format::Json => render_json(&view)? + "\n",
            })
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
