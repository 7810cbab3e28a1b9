//! Command dispatch.

use anyhow::{Context, Result, anyhow, bail};
use ceylon_client::{ContentService, GeminiClient, RequestState, ResultSlot};
use ceylon_core::prompt::build_meta_description;
use ceylon_core::{
    AppConfig, Error, GeneratedArticle, HtmlSanitizer, NewsTopic, select_sanitizer, strip_code_fences,
};
use futures_util::future::join_all;
use serde::Serialize;
use std::future::Future;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::args::{Cli, Command, RailwayCommand};
use crate::render;

/// Where and how results are written.
struct Output {
    json: bool,
    file: Option<PathBuf>,
}

impl Output {
    fn print(&self, text: &str) {
        println!("{}", text);
    }

    /// Write `content` to the `--output` file, if one was given.
    fn copy(&self, content: &str) -> Result<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };

        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = content.len(), "wrote output file");
        Ok(())
    }

    fn topics(&self, topics: &[NewsTopic]) -> Result<()> {
        if self.file.is_some() {
            tracing::warn!("--output is ignored for topic listings");
        }

        let text = if self.json { render::json(&topics)? } else { render::topics(topics) };
        self.print(&text);
        Ok(())
    }

    fn article(&self, article: &GeneratedArticle) -> Result<()> {
        let text = if self.json { render::json(article)? } else { render::article(article) };
        self.print(&text);
        self.copy(&article.html)
    }
}

#[derive(Debug, Serialize)]
struct MetaOutput<'a> {
    keyword: &'a str,
    description: &'a str,
    length: usize,
}

#[derive(Debug, Serialize)]
struct SanitizeOutput<'a> {
    sanitizer: &'static str,
    html: &'a str,
}

/// Run the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let output = Output { json: cli.json, file: cli.output };

    match cli.command {
        Command::Trends { refresh } => {
            let service = build_service()?;
            let state = newest(refresh, || service.trending_topics()).await;
            output.topics(&into_result(state)?)
        }
        Command::Article { topic } => {
            let service = build_service()?;
            output.article(&service.manual_article(&topic).await?)
        }
        Command::Railway { command: RailwayCommand::Topics { refresh } } => {
            let service = build_service()?;
            let state = newest(refresh, || service.railway_topics()).await;
            output.topics(&into_result(state)?)
        }
        Command::Railway { command: RailwayCommand::Article { topic } } => {
            let service = build_service()?;
            output.article(&service.railway_article(&topic).await?)
        }
        Command::Meta { keyword, file } => {
            if keyword.trim().is_empty() {
                bail!("keyword required");
            }

            let config = AppConfig::load().context("failed to load configuration")?;
            let sanitizer = select_sanitizer(config.sanitizer);
            let html = sanitize_input(&read_input(file.as_deref())?, sanitizer.as_ref());
            let description = build_meta_description(&keyword, &html);
            let length = description.chars().count();

            if output.json {
                output.print(&render::json(&MetaOutput { keyword: &keyword, description: &description, length })?);
            } else {
                output.print(&description);
            }
            output.copy(&description)
        }
        Command::Sanitize { file } => {
            let config = AppConfig::load().context("failed to load configuration")?;
            let sanitizer = select_sanitizer(config.sanitizer);
            let html = sanitize_input(&read_input(file.as_deref())?, sanitizer.as_ref());

            if output.json {
                output.print(&render::json(&SanitizeOutput { sanitizer: sanitizer.name(), html: &html })?);
            } else {
                output.print(&html);
            }
            output.copy(&html)
        }
    }
}

fn build_service() -> Result<ContentService<GeminiClient>> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let client = GeminiClient::from_app_config(&config).context("failed to create model client")?;
    let service = ContentService::from_app_config(client, &config);

    tracing::debug!(model = %config.model, sanitizer = service.sanitizer_name(), "content service ready");
    Ok(service)
}

/// Issue `count` overlapping requests through one slot and return the final state.
///
/// Only the newest-issued request can write the slot, so older completions are
/// dropped whatever order they finish in.
async fn newest<T, F, Fut>(count: u32, request: F) -> RequestState<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let slot = ResultSlot::new();
    let applied = join_all((0..count.max(1)).map(|_| slot.run(request()))).await;

    tracing::debug!(
        issued = applied.len(),
        applied = applied.iter().filter(|applied| **applied).count(),
        "requests settled"
    );

    slot.take().await
}

fn into_result<T>(state: RequestState<T>) -> Result<T> {
    match state {
        RequestState::Succeeded(value) => Ok(value),
        RequestState::Failed(message) => Err(anyhow!(message)),
        RequestState::Idle | RequestState::Requesting => bail!("request produced no result"),
    }
}

/// Unwrap a fenced block if present and sanitize the HTML.
fn sanitize_input(raw: &str, sanitizer: &dyn HtmlSanitizer) -> String {
    sanitizer.sanitize(&strip_code_fences(raw))
}

/// Read HTML from `path`, or from stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ceylon_core::sanitize::RegexSanitizer;
    use std::sync::atomic::{AtomicU32, Ordering};

    const WRAPPED_ARTICLE: &str = "```html\n<html><head><title>Draft</title><script>var a=1</script></head>\
        <body><p>The night mail to Jaffna runs again.</p><style>p{}</style></body></html>\n```";

    #[test]
    fn test_sanitize_input_unwraps_and_cleans() {
        let html = sanitize_input(WRAPPED_ARTICLE, &RegexSanitizer);
        assert_eq!(html, "<p>The night mail to Jaffna runs again.</p>");
    }

    #[test]
    fn test_meta_from_document_ignores_head_and_scripts() {
        let sanitizers: [Box<dyn HtmlSanitizer>; 2] =
            [select_sanitizer(ceylon_core::SanitizerMode::Auto), Box::new(RegexSanitizer)];
        for sanitizer in sanitizers {
            let html = sanitize_input(WRAPPED_ARTICLE, sanitizer.as_ref());
            let description = build_meta_description("night mail", &html);
            assert_eq!(description, "The night mail to Jaffna runs again.");
        }
    }

    #[tokio::test]
    async fn test_newest_single_request() {
        let state = newest(1, || async { Ok::<_, Error>(vec![1, 2]) }).await;
        assert_eq!(state, RequestState::Succeeded(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_newest_keeps_last_issued() {
        let issued = AtomicU32::new(0);
        let state = newest(3, || {
            let n = issued.fetch_add(1, Ordering::SeqCst);
            async move {
                // The newest request finishes first.
                for _ in 0..(3 - n) * 2 {
                    tokio::task::yield_now().await;
                }
                Ok::<_, Error>(n)
            }
        })
        .await;

        assert_eq!(issued.load(Ordering::SeqCst), 3);
        assert_eq!(state, RequestState::Succeeded(2));
    }

    #[tokio::test]
    async fn test_newest_failure_message() {
        let state: RequestState<u32> = newest(1, || async { Err(Error::Parse("eof".into())) }).await;
        let err = into_result(state).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse JSON response; please try again");
    }

    #[test]
    fn test_into_result_idle() {
        assert!(into_result(RequestState::<u32>::Idle).is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("ceylon-read-input-{}.html", std::process::id()));
        std::fs::write(&path, "<p>Galle Fort</p>").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "<p>Galle Fort</p>");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/ceylon.html"))).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_copy_writes_output_file() {
        let path = std::env::temp_dir().join(format!("ceylon-copy-{}.html", std::process::id()));
        let output = Output { json: false, file: Some(path.clone()) };

        output.copy("<h1>Kandy</h1>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<h1>Kandy</h1>");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_copy_without_output_file() {
        let output = Output { json: true, file: None };
        assert!(output.copy("anything").is_ok());
    }
}
