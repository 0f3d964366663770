use anyhow::{bail, Result};
use log::info;
use std::path::Path;

use crate::api::{models::Record, yandex::TOKEN_URL, DnsApiClient, RecordChange};
use crate::cli::{AddArgs, ConnectionArgs, DeleteArgs, EditArgs, ListArgs, SettingsArgs};
use crate::config::{self, Settings};
use crate::output::{self, filter_records, split_list, Format, Projection, DEFAULT_PROPS};

const CHANGED_PROPS: &str = "id,type,content,subdomain,priority,ttl,fqdn";

#[derive(Clone)]
pub struct Target {
    pub domain: String,
    pub admin_token: String,
}

impl Target {
    pub fn resolve(args: &ConnectionArgs, settings: &Settings) -> Result<Self> {
        let pick = |flag: &Option<String>, saved: &Option<String>| {
            [flag, saved]
                .into_iter()
                .flatten()
                .find(|v| !v.is_empty())
                .cloned()
        };

        let Some(admin_token) = pick(&args.admin_token, &settings.admin_token) else {
            bail!("--admin-token is not set (get one at {})", TOKEN_URL);
        };
        let Some(domain) = pick(&args.domain, &settings.domain) else {
            bail!("--domain is not set");
        };

        Ok(Self {
            domain,
            admin_token,
        })
    }
}

pub async fn list(
    client: &dyn DnsApiClient,
    domain: &str,
    args: &ListArgs,
    settings: &Settings,
) -> Result<String> {
    let format: Format = args.format.parse()?;
    if format == Format::Json {
        return Ok(client.list(domain).await?.json);
    }

    let raw_props = args
        .props
        .as_deref()
        .or(settings.props.as_deref())
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(DEFAULT_PROPS);
    let projection = Projection::new(raw_props)?;
    let types = split_list(&args.types);

    let response = client.list(domain).await?;
    info!(
        "Fetched {} records for {}",
        response.records.len(),
        response.domain.as_deref().unwrap_or(domain)
    );

    let records = filter_records(&response.records, &types);
    Ok(output::render(format, &response.json, &records, &projection)?)
}

pub async fn add(client: &dyn DnsApiClient, domain: &str, args: &AddArgs) -> Result<String> {
    let format: Format = args.format.parse()?;
    let record = args.record.to_record(0);

    let change = client.add_record(&record, domain).await?;
    info!("Created record {}", change.record.record_id);
    render_change(format, &change, "Record successfully created")
}

pub async fn edit(client: &dyn DnsApiClient, domain: &str, args: &EditArgs) -> Result<String> {
    let format: Format = args.format.parse()?;
    let record = args.record.to_record(args.id);

    let change = client.edit_record(&record, domain).await?;
    info!("Changed record {}", change.record.record_id);
    render_change(format, &change, "Record successfully changed")
}

pub async fn delete(client: &dyn DnsApiClient, domain: &str, args: &DeleteArgs) -> Result<String> {
    let format: Format = args.format.parse()?;
    let record = Record {
        record_id: args.id,
        ..Default::default()
    };

    let response = client.delete_record(&record, domain).await?;
    info!("Deleted record {}", response.record_id.unwrap_or(args.id));
    match format {
        Format::Json => Ok(response.json),
        Format::List | Format::Table => Ok("Record successfully deleted\n".to_string()),
    }
}

/// Prints the saved settings, or merges the given values into the file.
pub fn settings(path: &Path, current: Settings, args: &SettingsArgs) -> Result<String> {
    let update = Settings {
        admin_token: args.admin_token.clone(),
        domain: args.domain.clone(),
        props: args.props.clone(),
    };

    if update.is_empty() {
        return Ok(describe_settings(&current));
    }

    if let Some(props) = update.props.as_deref() {
        Projection::new(props)?;
    }

    let mut merged = current;
    merged.merge(update);
    config::save(path, &merged)?;
    info!("Saved settings to {}", path.display());
    Ok(format!(
        "Settings successfully changed in \"{}\"\n",
        path.display()
    ))
}

fn describe_settings(settings: &Settings) -> String {
    let mut out = format!(
        "Settings:\n\tadmin-token {}\n\tdomain      {}\n\tprops       {}\n",
        settings.admin_token.as_deref().unwrap_or(""),
        settings.domain.as_deref().unwrap_or(""),
        settings.props.as_deref().unwrap_or(DEFAULT_PROPS),
    );
    if settings.admin_token.is_none() {
        out.push_str(&format!("\nGet an admin token at {}\n", TOKEN_URL));
    }
    out
}

fn render_change(format: Format, change: &RecordChange, headline: &str) -> Result<String> {
    if format == Format::Json {
        return Ok(change.response.json.clone());
    }

    let projection = Projection::new(CHANGED_PROPS)?;
    let body = output::render(format, &change.response.json, &[&change.record], &projection)?;
    Ok(format!("{}\n\n{}", headline, body))
}
