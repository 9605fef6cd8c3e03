//! # backup-plans
//! Loads the backup plans a backup run would use and reports them.
//!

use std::{fs, path::PathBuf};

use backup_plans::{Plan, init_logger, load_plans};
use tracing::{error, info};

fn main() {
    let _logger = init_logger().unwrap();

    // Write an example plan if args include 'init'.
    if std::env::args().any(|arg| arg.eq("init")) {
        let plan = Plan::default();
        let contents = serde_yaml::to_string(&plan).unwrap();
        fs::create_dir_all("plans").expect("Should be able to create the plans directory");
        fs::write("plans/example.yml", contents)
            .expect("Should be able to write to plans/example.yml");
        return;
    }

    let directory = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("./plans"), PathBuf::from);

    // Load plans
    let plans = match load_plans(&directory) {
        Ok(plans) => plans,
        Err(error) => {
            error!("Could not load plans: {error}");
            return;
        }
    };

    info!("Loaded {} plans from {directory:?}", plans.len());

    for plan in &plans {
        info!(
            "Plan {:?}: database {:?} on {:?}, cron {:?}, s3: {}, smtp: {}, slack: {}",
            plan.name,
            plan.target.database,
            plan.target.host,
            plan.scheduler.cron,
            plan.s3.is_some(),
            plan.smtp.is_some(),
            plan.slack.is_some(),
        );
    }
}
