use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use printer_snmp::config::AppConfig;
use printer_snmp::routes::{AppState, create_router};
use printer_snmp::{JsonFormatter, Printer, PrinterCollector, Snmp2Transport, SnmpTransport};

#[derive(Parser)]
#[command(name = "printer-snmp", version, about = "Опрос принтеров по SNMP")]
struct Cli {
    /// YAML файл с настройками
    #[arg(long, default_value = "./profiles/printer.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Опрашивает один принтер и печатает отчёт в JSON
    Report {
        /// Адрес принтера, перекрывает конфигурацию
        #[arg(long)]
        target: Option<String>,
        /// Компактный JSON в одну строку
        #[arg(long)]
        compact: bool,
    },
    /// Запускает HTTP сервер с POST /printer и GET /health
    Serve {
        /// Адрес для прослушивания, перекрывает конфигурацию
        #[arg(long)]
        listen: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;
    config.log_config();

    let transport: Arc<dyn SnmpTransport> = Arc::new(Snmp2Transport::new());

    match cli.command {
        Command::Report { target, compact } => {
            let target = target.unwrap_or_else(|| config.get_target());
            run_report(&config, transport, &target, compact).await
        }
        Command::Serve { listen } => {
            let listen = listen.unwrap_or_else(|| config.get_listen());
            run_server(&config, transport, &listen).await
        }
    }
}

async fn run_report(
    config: &AppConfig,
    transport: Arc<dyn SnmpTransport>,
    target: &str,
    compact: bool,
) -> Result<()> {
    let mut printer = Printer::connect(transport, target)?;
    printer.device_mut().set_timeout(config.get_timeout())?;
    printer.device_mut().set_community(&config.get_community())?;

    let report = PrinterCollector::collect_all(&printer)
        .await
        .context(format!("Не удалось опросить принтер {}", target))?;

    let json = if compact {
        JsonFormatter::to_json_compact(&report)?
    } else {
        JsonFormatter::to_json_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

async fn run_server(config: &AppConfig, transport: Arc<dyn SnmpTransport>, listen: &str) -> Result<()> {
    let state = AppState {
        transport,
        timeout_micros: config.get_timeout(),
        community: config.get_community(),
    };

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .context(format!("Не удалось занять адрес {}", listen))?;

    info!(listen, "HTTP сервер запущен");
    axum::serve(listener, create_router(state))
        .await
        .context("HTTP сервер завершился с ошибкой")?;

    Ok(())
}
