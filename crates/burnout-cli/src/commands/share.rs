//! Share, export and webhook credential commands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use burnout_core::share::credentials::{self, KeyringStore};
use burnout_core::share::{
    self, Clipboard, Email, FileExport, SocialNetwork, SocialShare, TerminalShare,
    TerminalStream, Webhook,
};
use burnout_core::{Assessment, Config, ExportFormat, Notification, ShareTarget};

use super::inputs::InputArgs;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShareVia {
    /// Copy the share text to the clipboard
    Copy,
    /// Post on X
    X,
    /// Share on LinkedIn
    Linkedin,
    /// Share on Facebook
    Facebook,
    /// Open a prefilled email
    Email,
    /// Post to the configured chat webhook
    Webhook,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Markdown,
    Json,
    Svg,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => ExportFormat::Text,
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Svg => ExportFormat::Svg,
        }
    }
}

#[derive(Args)]
pub struct ShareArgs {
    /// Where to share
    #[arg(value_enum)]
    pub via: ShareVia,
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Email recipient (overrides share.email_to)
    #[arg(long)]
    pub to: Option<String>,
    /// Print the notification as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Output format (defaults to share.export_format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Output file (defaults to burnout-assessment.<ext> in the current directory)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    /// Print the notification as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum WebhookAction {
    /// Store the webhook URL in the OS keyring
    SetUrl {
        /// Discord or Slack incoming webhook URL
        url: String,
    },
    /// Remove the stored webhook URL
    Clear,
}

fn primary_target(args: &ShareArgs, config: &Config) -> Box<dyn ShareTarget> {
    let page_url = config.share.page_url.clone();
    match args.via {
        ShareVia::Copy => Box::new(Clipboard::detect()),
        ShareVia::X => Box::new(SocialShare::new(SocialNetwork::X, page_url)),
        ShareVia::Linkedin => Box::new(SocialShare::new(SocialNetwork::LinkedIn, page_url)),
        ShareVia::Facebook => Box::new(SocialShare::new(SocialNetwork::Facebook, page_url)),
        ShareVia::Email => Box::new(Email::new(
            args.to.clone().unwrap_or_else(|| config.share.email_to.clone()),
            config.share.email_subject.clone(),
        )),
        ShareVia::Webhook => Box::new(Webhook::from_config_or_store(
            &config.share.webhook_url,
            &KeyringStore::default(),
        )),
    }
}

fn report(notification: &Notification, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(notification)?);
    } else if notification.is_success() {
        println!("{notification}");
    } else {
        eprintln!("{notification}");
    }

    if notification.is_success() {
        Ok(())
    } else {
        Err(notification.title.clone().into())
    }
}

pub async fn run_share(args: ShareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let assessment = Assessment::try_evaluate(args.inputs.resolve(&config))?;

    tracing::debug!(via = ?args.via, "sharing assessment");
    let primary = primary_target(&args, &config);
    let clipboard = Clipboard::detect();
    // with --json, stdout carries only the notification
    let terminal = TerminalShare::new(if args.json {
        TerminalStream::Stderr
    } else {
        TerminalStream::Stdout
    });

    let notification = match args.via {
        ShareVia::Copy => {
            share::share_with_fallback(primary.as_ref(), &[&terminal], &assessment).await
        }
        _ => {
            share::share_with_fallback(primary.as_ref(), &[&clipboard, &terminal], &assessment)
                .await
        }
    };
    report(&notification, args.json)
}

pub async fn run_export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let assessment = Assessment::try_evaluate(args.inputs.resolve(&config))?;

    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or(config.share.export_format);
    let export = match args.out {
        Some(path) => FileExport::new(path, format),
        None => FileExport::in_dir(&std::env::current_dir()?, format),
    };

    let notification = share::share(&export, &assessment).await;
    report(&notification, args.json)
}

pub fn run_webhook(action: WebhookAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = KeyringStore::default();
    match action {
        WebhookAction::SetUrl { url } => {
            credentials::store_webhook_url(&store, &url)?;
            println!("webhook URL stored");
        }
        WebhookAction::Clear => {
            credentials::clear_webhook_url(&store)?;
            println!("webhook URL removed");
        }
    }
    Ok(())
}
