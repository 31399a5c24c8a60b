use anyhow::{Context as _, Result, bail};
use chrono::NaiveDate;
use dotenv::dotenv;
use serde::Serialize;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nursys::{
    Client, Context,
    config::Config,
    endpoints::{
        change_password::ChangePasswordRequest,
        notification_lookup::NotificationLookupSubmitRequest,
        nurse_lookup::{NurseLookupRequest, NurseLookupSubmitRequest},
    },
};

const USAGE: &str = "usage: nursys <command> [args]

commands:
  change-password <new-password>
  manage-nurse-list-result <transaction-id>
  nurse-lookup <ncsbn-id>...
  nurse-lookup-result <transaction-id>
  notification-lookup <start YYYY-MM-DD> <end YYYY-MM-DD>
  notification-lookup-result <transaction-id>
  retrieve-documents <document-id>...";

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    // Initialize tracing; stdout is reserved for the JSON reply
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    let config = Config::from_env()?;
    let client = config.client()?;
    info!(base_url = client.base_url(), %command, "calling nursys");

    // CTRL+C cancels the in-flight call instead of killing the process mid-request
    let (ctx, cancel) = Context::cancellable();
    let ctx = config.bounded(ctx);
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("interrupted, cancelling request");
            cancel.cancel();
        }
    });

    let reply = run(&client, &ctx, command, rest).await?;
    println!("{reply}");

    Ok(())
}

async fn run(client: &Client, ctx: &Context, command: &str, args: &[String]) -> Result<String> {
    match (command, args) {
        ("change-password", [new_password]) => pretty(
            &client
                .change_password(ctx, &ChangePasswordRequest::new(new_password.as_str()))
                .await?,
        ),
        ("manage-nurse-list-result", [transaction_id]) => {
            pretty(&client.get_manage_nurse_list_result(ctx, transaction_id).await?)
        }
        ("nurse-lookup", ids) if !ids.is_empty() => {
            let request = NurseLookupSubmitRequest {
                nurse_lookup_requests: ids
                    .iter()
                    .map(|id| NurseLookupRequest::by_ncsbn_id(id.as_str()))
                    .collect(),
            };
            pretty(&client.nurse_lookup(ctx, &request).await?)
        }
        ("nurse-lookup-result", [transaction_id]) => {
            pretty(&client.get_nurse_lookup_result(ctx, transaction_id).await?)
        }
        ("notification-lookup", [start, end]) => {
            let request =
                NotificationLookupSubmitRequest::new(parse_date(start)?, parse_date(end)?);
            pretty(&client.notification_lookup(ctx, &request).await?)
        }
        ("notification-lookup-result", [transaction_id]) => {
            pretty(&client.get_notification_lookup_result(ctx, transaction_id).await?)
        }
        ("retrieve-documents", ids) if !ids.is_empty() => {
            pretty(&client.retrieve_documents(ctx, ids).await?)
        }
        _ => bail!("unknown command or arguments: {command}\n\n{USAGE}"),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date {raw:?}, expected YYYY-MM-DD"))
}

fn pretty<T: Serialize>(reply: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(reply)?)
}
