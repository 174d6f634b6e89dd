use anyhow::{Context, Result, anyhow, bail};
use chrono_tz::Tz;

use super::{
    config_model::{Analytics, DotEnvyConfig, Subscriptions},
    stage::Stage,
};

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::London;
pub const DEFAULT_TRIAL_PERIOD_DAYS: i64 = 7;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let analytics = Analytics {
        timezone: parse_timezone(std::env::var("RANGE_TIMEZONE").ok())?,
    };

    let subscriptions = Subscriptions {
        trial_period_days: parse_trial_period_days(std::env::var("TRIAL_PERIOD_DAYS").ok())?,
    };

    Ok(DotEnvyConfig {
        stage: get_stage(),
        analytics,
        subscriptions,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn parse_timezone(raw: Option<String>) -> Result<Tz> {
    match raw.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<Tz>()
            .map_err(|err| anyhow!("RANGE_TIMEZONE is invalid: {err}")),
        None => Ok(DEFAULT_TIMEZONE),
    }
}

fn parse_trial_period_days(raw: Option<String>) -> Result<i64> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Ok(DEFAULT_TRIAL_PERIOD_DAYS);
    };

    let days: i64 = raw
        .trim()
        .parse()
        .context("TRIAL_PERIOD_DAYS is invalid")?;
    if days <= 0 {
        bail!("TRIAL_PERIOD_DAYS must be positive, got {days}");
    }

    Ok(days)
}
