use clap::Parser;
use multiplier_client::app::{render::render, session::run_session};
use multiplier_client::config::{Command, LogFormat};
use multiplier_client::core::ConfigProvider;
use multiplier_client::utils::error::{ClientError, ErrorSeverity};
use multiplier_client::utils::{logger, validation::Validate};
use multiplier_client::{CliConfig, HttpMultiplyApi, Operand, RequestController, TomlConfig};
use tokio::io::BufReader;

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 2,      // 輸入錯誤
        ErrorSeverity::Medium => 3,   // 後端回應錯誤
        ErrorSeverity::High => 4,     // 連線或解碼錯誤
        ErrorSeverity::Critical => 1, // 配置錯誤
    }
}

fn fail(e: &ClientError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml_config = match cli.config.as_deref().map(TomlConfig::from_file) {
        Some(Ok(config)) => Some(config),
        Some(Err(e)) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
        None => None,
    };

    let level = toml_config.as_ref().and_then(|c| c.log_level());
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, level),
        LogFormat::Json => logger::init_json_logger(cli.verbose, level),
    }

    tracing::info!("Starting multiplier-client");
    tracing::debug!("CLI config: {:?}", cli);

    // 檔案中有設定的鍵優先，其餘沿用命令列
    let settings = cli.resolve(toml_config.as_ref());
    if let Err(e) = settings.validate() {
        fail(&e);
    }

    tracing::info!("🔗 Backend: {}", settings.base_url());
    let api = match HttpMultiplyApi::from_config(&settings) {
        Ok(api) => api,
        Err(e) => fail(&e),
    };
    let controller = RequestController::new(api);

    match cli.command {
        Command::Calc { num1, num2 } => {
            controller.set_operand(Operand::First, num1);
            controller.set_operand(Operand::Second, num2);
            let outcome = controller.calculate().await;

            println!("{}", render(&controller.snapshot()));
            if let Err(e) = outcome {
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                std::process::exit(exit_code(e.severity()));
            }
        }
        Command::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            run_session(&controller, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
