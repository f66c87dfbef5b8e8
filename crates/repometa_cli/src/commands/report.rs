//! The `report`, `languages`, and `topics` commands.

use console::style;
use repometa::{Activity, GitHubRepo, License};
use serde::Serialize;

use super::shared::open_repo;
use crate::config::Config;

/// One repository's metadata, assembled for rendering.
#[derive(Debug, Serialize)]
struct Report {
    repository: String,
    url: String,
    license: Option<License>,
    latest_release: Option<Activity>,
    first_release: Option<Activity>,
    last_activity: Activity,
    languages: Vec<String>,
    topics: Vec<String>,
}

async fn build_report(repo: &GitHubRepo) -> Result<Report, Box<dyn std::error::Error>> {
    Ok(Report {
        repository: repo.reference().to_string(),
        url: repo.html_url().to_string(),
        license: repo.license().await?,
        latest_release: repo.latest_release().await?,
        first_release: repo.first_release().await?,
        last_activity: repo.last_activity().await?,
        languages: repo.languages().await?,
        topics: repo.topics().await?,
    })
}

fn activity_line(activity: &Activity) -> String {
    format!("{} ({})", activity.date, activity.url)
}

fn render_human(report: &Report) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: String| {
        out.push_str(&format!("{:<16} {}\n", style(label).bold(), value));
    };

    line("Repository", format!("{} ({})", report.repository, report.url));
    line(
        "License",
        match &report.license {
            Some(license) => format!("{} ({})", license.name, license.url),
            None => "none detected".to_string(),
        },
    );
    line(
        "Latest release",
        match &report.latest_release {
            Some(activity) => activity_line(activity),
            None => "none".to_string(),
        },
    );
    line(
        "First release",
        match &report.first_release {
            Some(activity) => activity_line(activity),
            None => "none".to_string(),
        },
    );
    line("Last activity", activity_line(&report.last_activity));
    line("Languages", report.languages.join(", "));
    line("Topics", report.topics.join(", "));

    out
}

pub(crate) async fn handle_report(
    url: &str,
    json: bool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = open_repo(url, config).await?;
    let report = build_report(&repo).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_human(&report));
    }

    Ok(())
}

pub(crate) async fn handle_languages(
    url: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = open_repo(url, config).await?;
    for language in repo.languages().await? {
        println!("{language}");
    }
    Ok(())
}

pub(crate) async fn handle_topics(
    url: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = open_repo(url, config).await?;
    for topic in repo.topics().await? {
        println!("{topic}");
    }
    Ok(())
}
