//! CLI runner - executes commands

use crate::auth::{CallContext, Credentials};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::{AccountSelector, QontoClient, TransactionQuery};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::model::{PageMeta, TransactionStatus};
use crate::pagination::{Page, PageOptions};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// A single page as printed by the CLI
#[derive(Serialize)]
struct PageOutput<'a, T> {
    items: &'a [T],
    meta: &'a PageMeta,
}

fn page_value<T: Serialize>(page: &Page<T>) -> Result<Value> {
    Ok(serde_json::to_value(PageOutput {
        items: &page.items,
        meta: &page.meta,
    })?)
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its result on stdout
    pub async fn run(&self) -> Result<()> {
        let value = self.execute().await?;
        self.output(&value)
    }

    /// Run the CLI command and return its JSON result
    pub async fn execute(&self) -> Result<Value> {
        let client = self.client()?;
        let ctx = CallContext::new().with_credentials(self.credentials()?);

        match &self.cli.command {
            Commands::Organization => {
                let org = client
                    .get_organization(&ctx)
                    .await
                    .context("Failed to fetch organization")?;
                Ok(serde_json::to_value(org)?)
            }
            Commands::BankAccount => {
                let account = client
                    .get_bank_account(&ctx)
                    .await
                    .context("Failed to fetch bank account")?;
                Ok(serde_json::to_value(account)?)
            }
            Commands::Transactions {
                account,
                iban,
                all,
                status,
                sort_by,
                page,
                per_page,
            } => {
                let selector = match (account, iban) {
                    (Some(slug), Some(iban)) => AccountSelector::new(slug.clone(), iban.clone()),
                    _ => {
                        let main = client
                            .get_bank_account(&ctx)
                            .await
                            .context("Failed to resolve the main bank account")?;
                        AccountSelector::new(
                            account.clone().unwrap_or(main.slug),
                            iban.clone().unwrap_or(main.iban),
                        )
                    }
                };

                let mut query = TransactionQuery::new().page(*page, *per_page);
                for s in status {
                    query = query.status(TransactionStatus::from(s.as_str()));
                }
                if let Some(sort) = sort_by {
                    query = query.sort_by(sort.clone());
                }

                if *all {
                    let transactions = client
                        .get_all_transactions(&ctx, &selector.slug, &selector.iban, &query)
                        .await
                        .context("Failed to fetch transactions")?;
                    info!("Fetched {} transactions", transactions.len());
                    Ok(serde_json::to_value(transactions)?)
                } else {
                    let page = client
                        .get_transactions(&ctx, &selector.slug, &selector.iban, &query)
                        .await
                        .context("Failed to fetch transactions")?;
                    page_value(&page)
                }
            }
            Commands::Labels {
                all,
                page,
                per_page,
            } => {
                let options = PageOptions::new(*page, *per_page);
                if *all {
                    let labels = client
                        .get_all_labels(&ctx, options)
                        .await
                        .context("Failed to fetch labels")?;
                    Ok(serde_json::to_value(labels)?)
                } else {
                    let page = client
                        .get_labels(&ctx, options)
                        .await
                        .context("Failed to fetch labels")?;
                    page_value(&page)
                }
            }
            Commands::Memberships {
                all,
                page,
                per_page,
            } => {
                let options = PageOptions::new(*page, *per_page);
                if *all {
                    let memberships = client
                        .get_all_memberships(&ctx, options)
                        .await
                        .context("Failed to fetch memberships")?;
                    Ok(serde_json::to_value(memberships)?)
                } else {
                    let page = client
                        .get_memberships(&ctx, options)
                        .await
                        .context("Failed to fetch memberships")?;
                    page_value(&page)
                }
            }
            Commands::Attachment { id, output } => {
                let attachment = match output {
                    Some(path) => client
                        .download_attachment_to_file(&ctx, id, path)
                        .await
                        .with_context(|| format!("Failed to download attachment {id}"))?,
                    None => client
                        .get_attachment(&ctx, id)
                        .await
                        .with_context(|| format!("Failed to fetch attachment {id}"))?,
                };
                Ok(serde_json::to_value(attachment)?)
            }
        }
    }

    /// Resolve credentials: an explicit file first, then the flags (or
    /// their env vars)
    fn credentials(&self) -> Result<Credentials> {
        if let Some(path) = &self.cli.credentials {
            return Credentials::from_file(path).with_context(|| {
                format!("Failed to load credentials from {}", path.display())
            });
        }
        if let (Some(slug), Some(secret)) = (&self.cli.slug, &self.cli.secret_key) {
            return Ok(Credentials::new(slug.clone(), secret.clone()));
        }
        Err(Error::MissingCredentials)
            .context("Set --slug and --secret-key, or pass --credentials <file>")
    }

    fn client(&self) -> Result<QontoClient> {
        let mut builder = ClientConfig::builder();
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url.clone());
        }
        QontoClient::with_config(builder.build()).context("Failed to build HTTP client")
    }

    fn output(&self, value: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}
