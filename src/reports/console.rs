use crate::Result;
use crate::profile::Profile;
use crate::scoring::Tier;
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(profile: &Profile, use_colors: bool, writer: &mut W) -> Result<()> {
    let metrics = &profile.metrics;
    let score = &profile.score;

    if use_colors {
        writeln!(writer, "{} ({})", profile.name.bold(), profile.username)?;
    } else {
        writeln!(writer, "{} ({})", profile.name, profile.username)?;
    }
    writeln!(writer, "{}", profile.bio)?;
    writeln!(writer)?;

    let tier = score.tier.to_string();
    let tier = if use_colors { color_tier(score.tier, &tier) } else { tier };
    writeln!(writer, "Level {} {tier}", score.level)?;

    writeln!(writer)?;
    section(writer, "Activity", use_colors)?;

    let rows = [
        ("Account age", format!("{} year(s)", metrics.account_age)),
        ("Repositories", metrics.total_repos.to_string()),
        ("Stars", metrics.total_stars.to_string()),
        ("Issues created", metrics.total_issues_created.to_string()),
        ("Pull requests", metrics.total_prs_created.to_string()),
        ("Recent commits", metrics.total_commits.to_string()),
        (
            "Top languages",
            if metrics.top_languages.is_empty() {
                "n/a".to_string()
            } else {
                metrics.top_languages.join(", ")
            },
        ),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in &rows {
        writeln!(writer, "  {label:<width$} : {value}")?;
    }

    if let Some(pr) = &metrics.first_pr {
        writeln!(writer)?;
        section(writer, "First pull request", use_colors)?;
        writeln!(writer, "  {} ({})", pr.title, pr.state)?;
        writeln!(writer, "  {} on {}", pr.repo_name, pr.created_at.format("%Y-%m-%d"))?;
        writeln!(writer, "  {}", pr.url)?;
    }

    writeln!(writer)?;
    writeln!(writer, "Contributions: {}", profile.contributions_chart)?;

    Ok(())
}

fn section<W: Write>(writer: &mut W, title: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    Ok(())
}

fn color_tier(tier: Tier, text: &str) -> String {
    match tier {
        Tier::Rookie => text.white().bold().to_string(),
        Tier::Challenger => text.green().bold().to_string(),
        Tier::Veteran => text.cyan().bold().to_string(),
        Tier::Elite => text.magenta().bold().to_string(),
        Tier::Legend => text.yellow().bold().to_string(),
    }
}
