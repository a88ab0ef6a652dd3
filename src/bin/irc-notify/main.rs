use clap::Parser as _;
use irc_notify::{
    cli::Args,
    config::{Config, Invocation, LogLevel},
    Notifier,
};

fn init_logger(level: LogLevel) -> anyhow::Result<()> {
    use fern::colors::{Color, ColoredLevelConfig};
    let level: log::LevelFilter = level.into();
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::White)
        .info(Color::Green)
        .warn(Color::BrightYellow)
        .error(Color::BrightRed);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}][{}] {}",
                chrono::Utc::now().format("%F %H:%M:%S%.3f"),
                format!("{: >5}", colors.color(record.level())),
                record.target(),
                message,
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("irc_notify", level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    init_logger(args.log_level.unwrap_or(config.log_level))?;

    let invocation = Invocation::new(args, &config)?;
    let outcome = Notifier::connect(invocation).await?.run().await?;
    if !outcome.is_clean() {
        log::warn!("the server closed the connection before we quit");
    }

    Ok(())
}
