//! Backup plan definitions.
//!

use serde::{Deserialize, Serialize};

/// One backup plan definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// The plan's name. Derived from the plan's file name, a `name` key in
    /// the document is overwritten.
    #[serde(default)]
    pub name: String,

    /// The database to back up.
    #[serde(default)]
    pub target: Target,

    /// When the plan should run and how many backups to keep.
    #[serde(default)]
    pub scheduler: Scheduler,

    /// The S3 destination to upload backups to.
    pub s3: Option<S3>,

    /// The email notification settings.
    pub smtp: Option<Smtp>,

    /// The chat notification settings.
    pub slack: Option<Slack>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            name: "example".to_string(),
            target: Target {
                database: "postgres".to_string(),
                host: "localhost".to_string(),
                password: "password".to_string(),
                port: 5432,
                username: "postgres".to_string(),
            },
            scheduler: Scheduler {
                cron: "0 2 * * *".to_string(),
                retention: 7,
                timeout: 60,
            },
            s3: Some(S3 {
                bucket: "backups".to_string(),
                access_key: "access-key".to_string(),
                api: "S3v4".to_string(),
                secret_key: "secret-key".to_string(),
                url: "https://s3.example.com".to_string(),
            }),
            smtp: None,
            slack: None,
        }
    }
}

/// Connection details for the database a plan backs up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    /// The database to dump.
    pub database: String,

    /// The host the database is reachable on.
    pub host: String,

    /// The password to connect with.
    pub password: String,

    /// The port the database is reachable on.
    pub port: u16,

    /// The username to connect with.
    pub username: String,
}

/// The schedule settings for a plan, interpreted by the scheduler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheduler {
    /// The cron expression for when the plan should run.
    pub cron: String,

    /// The number of backups to keep.
    pub retention: u32,

    /// The timeout in seconds for a single run.
    pub timeout: u64,
}

/// An S3 compatible destination to upload backups to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct S3 {
    /// The bucket to upload into.
    pub bucket: String,

    /// The access key for the bucket.
    pub access_key: String,

    /// The provider API variant, for example `S3v4`.
    pub api: String,

    /// The secret key for the bucket.
    pub secret_key: String,

    /// The endpoint URL.
    pub url: String,
}

/// Email notification settings for a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smtp {
    /// The mail server to send through.
    pub server: String,

    /// The mail server's port.
    pub port: String,

    /// The password to authenticate with.
    pub password: String,

    /// The username to authenticate with.
    pub username: String,

    /// The sender address.
    pub from: String,

    /// The recipient addresses.
    pub to: Vec<String>,
}

/// Chat notification settings for a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slack {
    /// The webhook URL to post to.
    pub url: String,

    /// The channel to post in.
    pub channel: String,

    /// The username to post as.
    pub username: String,
}
