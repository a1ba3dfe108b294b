//! Command handlers: wire configuration and clients around the library.

use console::style;
use gisthub::models::{Comment, Gist, GistListsMode, GistsResponse};
use gisthub::{GistHubApiClient, GistHubServerClient, GistListFetcher};

use crate::config::Config;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Build the authenticated API client; panics with guidance when no token is
/// configured.
pub(crate) fn api_client(config: &Config) -> Result<GistHubApiClient, Box<dyn std::error::Error>> {
    let token = config.github_token().expect(
        "No GitHub token configured. Set GISTHUB_GITHUB_TOKEN or add github.token to config.toml.",
    );
    let client = match config.github.api_url.as_deref() {
        Some(url) => GistHubApiClient::with_base_url(token, url)?,
        None => GistHubApiClient::new(token)?,
    };
    Ok(client)
}

pub(crate) fn server_client(
    config: &Config,
) -> Result<GistHubServerClient, Box<dyn std::error::Error>> {
    let client = match config.server.url.as_deref() {
        Some(url) => GistHubServerClient::with_base_url(url)?,
        None => GistHubServerClient::new()?,
    };
    Ok(client)
}

/// Build the mode dispatcher. Authenticated modes need a real token; public
/// modes never touch the API client, so an empty token is fine there.
pub(crate) fn fetcher(
    config: &Config,
    needs_token: bool,
) -> Result<GistListFetcher, Box<dyn std::error::Error>> {
    let api = if needs_token {
        api_client(config)?
    } else {
        let token = config.github_token().unwrap_or_default();
        match config.github.api_url.as_deref() {
            Some(url) => GistHubApiClient::with_base_url(token, url)?,
            None => GistHubApiClient::new(token)?,
        }
    };
    Ok(GistListFetcher::new(api, server_client(config)?))
}

/// Fetch and print one page of a listing mode.
pub(crate) async fn list(
    config: &Config,
    mode: GistListsMode,
    page: u32,
    needs_token: bool,
) -> CommandResult {
    let fetcher = fetcher(config, needs_token)?;
    let response = fetcher.fetch(&mode, page).await?;
    print_page(&response, page);
    Ok(())
}

pub(crate) async fn get(config: &Config, gist_id: &str) -> CommandResult {
    let gist = api_client(config)?.gist(gist_id).await?;
    print_gist_detail(&gist);
    Ok(())
}

pub(crate) async fn star(config: &Config, gist_id: &str) -> CommandResult {
    api_client(config)?.star_gist(gist_id).await?;
    println!("Starred {gist_id}");
    Ok(())
}

pub(crate) async fn unstar(config: &Config, gist_id: &str) -> CommandResult {
    api_client(config)?.unstar_gist(gist_id).await?;
    println!("Unstarred {gist_id}");
    Ok(())
}

pub(crate) async fn check(config: &Config, gist_id: &str) -> CommandResult {
    if api_client(config)?.is_starred(gist_id).await? {
        println!("{gist_id} is starred");
    } else {
        println!("{gist_id} is not starred");
    }
    Ok(())
}

pub(crate) async fn update(
    config: &Config,
    gist_id: &str,
    file_name: &str,
    content: &str,
    description: Option<&str>,
) -> CommandResult {
    let gist = api_client(config)?
        .update_gist(gist_id, description, file_name, content)
        .await?;
    println!("Updated {}", gist.id);
    Ok(())
}

pub(crate) async fn delete(config: &Config, gist_id: &str) -> CommandResult {
    api_client(config)?.delete_gist(gist_id).await?;
    println!("Deleted {gist_id}");
    Ok(())
}

pub(crate) async fn comments(config: &Config, gist_id: &str) -> CommandResult {
    let comments = api_client(config)?.comments(gist_id).await?;
    print_comments(&comments);
    Ok(())
}

pub(crate) async fn whoami(config: &Config) -> CommandResult {
    let user = api_client(config)?.user().await?;
    let login = user.login.as_deref().unwrap_or("<unknown>");
    match user.name.as_deref() {
        Some(name) => println!("{login} ({name})"),
        None => println!("{login}"),
    }
    Ok(())
}

fn print_page(response: &GistsResponse, page: u32) {
    print_gists(&response.gists);
    if response.has_next_page {
        println!();
        println!(
            "{}",
            style(format!("More results may follow on page {}.", page + 1)).dim()
        );
    }
}

fn print_gists(gists: &[Gist]) {
    if gists.is_empty() {
        println!("{}", style("No gists found.").dim());
        return;
    }

    for gist in gists {
        let title = gist.files.first_name().unwrap_or("<no files>");
        let owner = gist
            .owner
            .as_ref()
            .and_then(|o| o.login.as_deref())
            .unwrap_or("unknown");
        println!(
            "{}  {}  {}",
            style(&gist.id).cyan(),
            style(owner).green(),
            title
        );
        if let Some(description) = gist.description.as_deref().filter(|d| !d.is_empty()) {
            println!("    {}", style(description).dim());
        }
    }
}

fn print_gist_detail(gist: &Gist) {
    println!("{}", style(&gist.id).cyan().bold());
    if let Some(description) = gist.description.as_deref().filter(|d| !d.is_empty()) {
        println!("{description}");
    }
    if let Some(html_url) = gist.html_url.as_deref() {
        println!("{}", style(html_url).dim());
    }
    for (name, file) in gist.files.iter() {
        println!();
        let language = file.language.as_deref().unwrap_or("text");
        println!("{} {}", style(name).bold(), style(language).dim());
        if let Some(content) = file.content.as_deref() {
            println!("{content}");
        }
        if file.truncated == Some(true) {
            println!("{}", style("[content truncated by the server]").yellow());
        }
    }
}

fn print_comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("{}", style("No comments.").dim());
        return;
    }

    for comment in comments {
        let author = comment
            .user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .unwrap_or("unknown");
        let when = comment
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{} {}", style(author).green(), style(when).dim());
        if let Some(body) = comment.body.as_deref() {
            println!("    {body}");
        }
    }
}
