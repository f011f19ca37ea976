use std::io::{self, Write};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_client::{ClientError, HttpClient};
use dashboard_core::{Dashboard, LOAD_FAILED_MESSAGE, fetch_all};
use tracing::info;

mod logging;
mod render;
mod settings;
mod shell;

use logging::init_logging;
use settings::{Settings, normalize_server};

#[derive(Debug, Parser)]
#[command(
    name = "dashboard-cli",
    version,
    about = "Терминальный дашборд пользователей и постов"
)]
struct Cli {
    /// Адрес API (по умолчанию DASHBOARD_API_URL или placeholder API).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Уровень логирования (перекрывает LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Интерактивная панель (по умолчанию).
    Shell,
    /// Список пользователей.
    Users {
        /// Фильтр по имени, логину или email.
        #[arg(long, default_value = "")]
        search: String,
        /// Вывести JSON вместо таблицы.
        #[arg(long)]
        json: bool,
    },
    /// Список постов.
    Posts {
        /// Фильтр по заголовку.
        #[arg(long, default_value = "")]
        search: String,
        /// Вывести JSON вместо таблицы.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(server) = cli.server {
        settings.api_url = normalize_server(server);
    }
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }

    init_logging(&settings.log_level)?;
    info!(api_url = %settings.api_url, "starting dashboard");

    let client = HttpClient::with_timeouts(
        settings.api_url.clone(),
        Duration::from_secs(settings.connect_timeout_secs),
        Duration::from_secs(settings.request_timeout_secs),
    )
    .map_err(map_client_error)?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            let stdin = io::stdin();
            shell::run(&client, stdin.lock(), io::stdout().lock())
                .await
                .context("ошибка ввода-вывода в интерактивном режиме")?;
        }
        Command::Users { search, json } => {
            let dashboard = load_once(&client, &search).await?;
            let users = dashboard.visible_users();
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_page(&dashboard)?;
            }
        }
        Command::Posts { search, json } => {
            let mut dashboard = load_once(&client, &search).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard.visible_posts())?);
            } else {
                dashboard.set_tab(dashboard_core::Tab::Posts);
                print_page(&dashboard)?;
            }
        }
    }

    Ok(())
}

/// Разовая загрузка для неинтерактивных команд: ошибка источника не
/// прячется за общим сообщением, а выводится пользователю.
async fn load_once(client: &HttpClient, search: &str) -> Result<Dashboard> {
    let data = fetch_all(client)
        .await
        .map_err(map_client_error)
        .context(LOAD_FAILED_MESSAGE)?;

    let mut dashboard = Dashboard::new();
    dashboard.finish_load(Ok::<_, ClientError>(data));
    dashboard.set_search(search);
    Ok(dashboard)
}

fn print_page(dashboard: &Dashboard) -> Result<()> {
    let mut out = io::stdout().lock();
    render::page(dashboard, &mut out)?;
    out.flush()?;
    Ok(())
}

fn map_client_error(err: ClientError) -> anyhow::Error {
    let message = match err {
        ClientError::NotFound => "коллекция не найдена (проверьте --server)".to_string(),
        ClientError::Status { status, message } => {
            format!("сервер ответил статусом {status}: {message}")
        }
        ClientError::Http(err) if err.is_timeout() => format!("превышено время ожидания: {err}"),
        ClientError::Http(err) if err.is_decode() => format!("некорректный ответ сервера: {err}"),
        ClientError::Http(err) => format!("ошибка HTTP: {err}"),
        ClientError::InvalidBaseUrl(url) => format!("некорректный адрес API: {url:?}"),
    };
    anyhow::anyhow!(message)
}
