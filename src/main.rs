use clap::Parser;
use slot_watch::core::{ConfigProvider, Notifier};
use slot_watch::utils::error::ErrorSeverity;
use slot_watch::utils::{logger, validation::Validate};
use slot_watch::{
    build_http_client, CliArgs, CycleDriver, HttpSlotSource, LogNotifier, SlotPoller,
    SmsGatewayNotifier, TomlConfig, WatchError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting slot-watch");

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => exit_with_config_error(&e),
    };

    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }
    if !args.dry_run {
        if let Err(e) = config.gateway.ensure_resolved() {
            exit_with_config_error(&e);
        }
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::debug!("Config: {:?}", config);
    display_config_summary(&config, &args);

    let client = build_http_client(&config.http)?;
    let source = HttpSlotSource::new(client.clone());

    let result = if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - messages are logged, no SMS is sent");
        run(source, LogNotifier, config, &args).await
    } else {
        let notifier = SmsGatewayNotifier::new(client, config.gateway.clone());
        run(source, notifier, config, &args).await
    };

    match result {
        Ok(cycles) => {
            tracing::info!("✅ slot-watch stopped after {} cycles", cycles);
        }
        Err(e) => {
            tracing::error!(
                "❌ slot-watch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run<N: Notifier>(
    source: HttpSlotSource,
    notifier: N,
    config: TomlConfig,
    args: &CliArgs,
) -> slot_watch::Result<u64> {
    let period = config.poll_interval();
    let poller = SlotPoller::new(source, notifier, config);
    let driver = CycleDriver::new_with_monitoring(poller, period, args.monitor);

    driver
        .run_until(args.cycle_limit(), async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 無法監聽訊號時就一直跑下去
                tracing::warn!("Unable to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await
}

fn exit_with_config_error(e: &WatchError) -> ! {
    tracing::error!("❌ Configuration failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn display_config_summary(config: &TomlConfig, args: &CliArgs) {
    println!("📋 Configuration Summary:");
    println!("  Locations: {}", config.locations.len());
    for location in &config.locations {
        println!("    - {} ({})", location.name, location.address);
    }
    println!("  Interval: {}s", config.schedule.interval_seconds);
    println!("  Deduplicate: {}", config.deduplicate());
    println!("  On site failure: {:?}", config.failure_policy());
    println!("  Gateway: {} -> {}", config.gateway.endpoint, config.gateway.to);

    match args.cycle_limit() {
        Some(limit) => println!("  Cycles: {}", limit),
        None => println!("  Cycles: until Ctrl-C"),
    }
    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
