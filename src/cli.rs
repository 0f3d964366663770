//! Implements command-line argument parsing.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::api::models::{Priority, Record, RecordType};

/// Parses the command line arguments.
pub fn parse() -> Args {
    Args::parse()
}

/// Manage DNS records of a domain delegated to Yandex
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Args {
    /// Settings file to use instead of ~/.yandexdns.json
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// The list of records in the domain zone
    List(ListArgs),
    /// Add a DNS record
    Add(AddArgs),
    /// Edit a DNS record
    Edit(EditArgs),
    /// Delete a DNS record by ID
    Delete(DeleteArgs),
    /// Show or change saved settings
    Settings(SettingsArgs),
}

/// Domain and token, falling back to the saved settings.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct ConnectionArgs {
    /// Domain name
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Admin token issued for the domain
    #[arg(short, long)]
    pub admin_token: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format (table|list|json)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Record properties to display, comma separated, or `*` for all
    #[arg(short, long)]
    pub props: Option<String>,

    /// Record types to display, comma separated, or `*` for all
    #[arg(short, long, default_value = "*")]
    pub types: String,
}

/// Record fields shared by `add` and `edit`.
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct RecordArgs {
    /// Type of record
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub record_type: Option<RecordType>,

    /// Content of the DNS record
    #[arg(short, long)]
    pub content: Option<String>,

    /// The lifetime of the DNS record in seconds
    #[arg(short = 'l', long)]
    pub ttl: Option<u32>,

    /// Name of the subdomain
    #[arg(short, long)]
    pub subdomain: Option<String>,

    /// Priority of an MX or SRV record
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Weight of the SRV record relative to others with the same priority
    #[arg(short, long)]
    pub weight: Option<u32>,

    /// TCP or UDP port of the host providing the service
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// The canonical name of the host providing the service
    #[arg(short = 'T', long)]
    pub target: Option<String>,

    /// Email address of the domain's administrator (SOA)
    #[arg(short = 'm', long)]
    pub admin_mail: Option<String>,

    /// Time between zone updates (SOA)
    #[arg(short, long)]
    pub refresh: Option<u32>,

    /// Time between attempts to obtain records (SOA)
    #[arg(short = 'R', long)]
    pub retry: Option<u32>,

    /// Time limit for the zone (SOA)
    #[arg(short, long)]
    pub expire: Option<u32>,

    /// Caching time for negative answers (SOA)
    #[arg(short, long)]
    pub neg_cache: Option<u32>,
}

impl RecordArgs {
    pub fn to_record(&self, record_id: u64) -> Record {
        Record {
            record_id,
            record_type: self
                .record_type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
            ttl: self.ttl.unwrap_or_default(),
            subdomain: self.subdomain.clone().unwrap_or_default(),
            priority: self
                .priority
                .as_deref()
                .map(Priority::from_input)
                .unwrap_or_default(),
            weight: self.weight.unwrap_or_default(),
            port: self.port.unwrap_or_default(),
            target: self.target.clone().unwrap_or_default(),
            admin_mail: self.admin_mail.clone().unwrap_or_default(),
            refresh: self.refresh.unwrap_or_default(),
            retry: self.retry.unwrap_or_default(),
            expire: self.expire.unwrap_or_default(),
            neg_cache: self.neg_cache.unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AddArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format (list|table|json)
    #[arg(short, long, default_value = "list")]
    pub format: String,

    #[command(flatten)]
    pub record: RecordArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct EditArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format (list|table|json)
    #[arg(short, long, default_value = "list")]
    pub format: String,

    /// ID of the record
    #[arg(short, long)]
    pub id: u64,

    #[command(flatten)]
    pub record: RecordArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format (list|table|json)
    #[arg(short, long, default_value = "list")]
    pub format: String,

    /// ID of the record
    #[arg(short, long)]
    pub id: u64,
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct SettingsArgs {
    /// Save the admin token
    #[arg(short, long)]
    pub admin_token: Option<String>,

    /// Save the domain name
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Save the default record properties for output
    #[arg(short, long)]
    pub props: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn add_flags_build_a_record() {
        let args = Args::try_parse_from([
            "yandexdns", "add", "-d", "example.com", "-t", "mx", "-c", "mx.yandex.net.",
            "-p", "10", "-l", "3600",
        ])
        .unwrap();
        let Command::Add(add) = args.command else {
            panic!("expected add");
        };
        assert_eq!(add.connection.domain.as_deref(), Some("example.com"));
        assert_eq!(add.format, "list");

        let record = add.record.to_record(0);
        assert_eq!(record.record_type, "MX");
        assert_eq!(record.content, "mx.yandex.net.");
        assert_eq!(record.priority, Priority::Text("10".into()));
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.weight, 0);
    }

    #[test]
    fn edit_requires_id() {
        assert!(Args::try_parse_from(["yandexdns", "edit", "-c", "1.1.1.1"]).is_err());
        let args = Args::try_parse_from(["yandexdns", "edit", "-i", "7", "-R", "900"]).unwrap();
        let Command::Edit(edit) = args.command else {
            panic!("expected edit");
        };
        let record = edit.record.to_record(edit.id);
        assert_eq!(record.record_id, 7);
        assert_eq!(record.retry, 900);
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        assert!(Args::try_parse_from(["yandexdns", "add", "-t", "PTR"]).is_err());
    }

    #[test]
    fn list_defaults() {
        let args = Args::try_parse_from(["yandexdns", "list"]).unwrap();
        let Command::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.format, "table");
        assert_eq!(list.types, "*");
        assert_eq!(list.props, None);
    }
}
